pub mod diagnostics;
#[cfg(test)]
pub mod test_utils;
pub mod url;
