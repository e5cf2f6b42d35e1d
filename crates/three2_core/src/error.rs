#[derive(Debug, PartialEq)]
pub enum Base32Error {
    InvalidChar(u8),
    OutputTooSmall,
}

#[cfg(feature = "std")]
impl std::error::Error for Base32Error {}

#[cfg(feature = "std")]
impl core::fmt::Display for Base32Error {
    fn fmt(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Base32Error::InvalidChar(c) => {
                ::core::write!(formatter, "Illegal base32 char number: {}", c)
            }
            Base32Error::OutputTooSmall {} => formatter.write_str("Output buffer too small"),
        }
    }
}
