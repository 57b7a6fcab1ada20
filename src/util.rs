//! Utility functions for decoding info query results.

use std::mem;
use std::ptr;
use std::string::FromUtf8Error;
use crate::OclPrm;

/// An error caused by a utility function.
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
    #[error(
        "The size of the source byte slice ({src} bytes) does not match \
        the size of the destination type ({dst} bytes)."
    )]
    BytesTo { src: usize, dst: usize },
    #[error(
        "The size of the source byte slice ({src} bytes) is not evenly \
        divisible by the size of the destination type ({dst} bytes)."
    )]
    BytesToVec { src: usize, dst: usize },
    #[error("Unable to convert bytes into string: {0}")]
    BytesIntoString(#[from] FromUtf8Error),
}

/// Copies a slice of bytes to a new value of a primitive type.
pub fn bytes_to<T: OclPrm>(bytes: &[u8]) -> Result<T, UtilError> {
    if mem::size_of::<T>() == bytes.len() {
        // `OclPrm` types are plain data, any bit pattern is valid.
        Ok(unsafe { ptr::read_unaligned(bytes.as_ptr() as *const T) })
    } else {
        Err(UtilError::BytesTo {
            src: bytes.len(),
            dst: mem::size_of::<T>(),
        })
    }
}

/// Copies a slice of bytes into a vector of a primitive type.
pub fn bytes_to_vec<T: OclPrm>(bytes: &[u8]) -> Result<Vec<T>, UtilError> {
    let size = mem::size_of::<T>();
    if size == 0 || bytes.len() % size != 0 {
        return Err(UtilError::BytesToVec { src: bytes.len(), dst: size });
    }

    Ok(bytes.chunks_exact(size)
        .map(|chunk| unsafe { ptr::read_unaligned(chunk.as_ptr() as *const T) })
        .collect())
}

/// Converts a byte Vec into a string, removing the trailing null byte if it
/// exists.
pub fn bytes_into_string(mut bytes: Vec<u8>) -> Result<String, UtilError> {
    if bytes.last() == Some(&0u8) {
        bytes.pop();
    }

    String::from_utf8(bytes)
        .map(|str| String::from(str.trim()))
        .map_err(UtilError::BytesIntoString)
}

/// Copies a primitive value into a new byte vector.
pub fn into_bytes<T: OclPrm>(val: T) -> Vec<u8> {
    let size = mem::size_of::<T>();
    let mut new_vec = vec![0u8; size];
    unsafe { ptr::copy_nonoverlapping(&val as *const T as *const u8, new_vec.as_mut_ptr(), size); }
    new_vec
}
