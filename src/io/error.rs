use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("bond '{bond}' references atom '{endpoint}' which is not present in the compound")]
    UnresolvedEndpoint { bond: String, endpoint: String },

    #[error(
        "molecule is too large to convert: {atoms} atoms and {bonds} bonds \
         (the notation is limited to 999 of each)"
    )]
    TooLarge { atoms: usize, bonds: usize },
}
