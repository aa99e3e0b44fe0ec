#[cfg(test)]
mod containers;
