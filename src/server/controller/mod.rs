pub mod voice;

#[cfg(test)]
mod test;
