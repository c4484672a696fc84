use thiserror::Error;

use crate::config::ConfigError;
use crate::data_structures::linked_list::ListError;
use crate::numerical::bits::BitError;
use crate::string_algorithms::anagram::AnagramError;

/// Any error raised by this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    List(#[from] ListError),
    #[error(transparent)]
    Bits(#[from] BitError),
    #[error(transparent)]
    Anagram(#[from] AnagramError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
