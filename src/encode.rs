//! Array to document conversion

use crate::error::EncodeError;
use crate::types::DenseArray;

/// Encode `array` as a document with one element per row
///
/// Not implemented for any element type yet; always returns
/// [`EncodeError::Unsupported`].
pub fn encode(array: &DenseArray) -> Result<Vec<u8>, EncodeError> {
    Err(EncodeError::Unsupported {
        element_type: array.element_type().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ElementType;

    #[test]
    fn test_encode_is_unsupported() {
        let array = DenseArray::zeros(ElementType::int(4), vec![2]).unwrap();
        assert_eq!(
            encode(&array),
            Err(EncodeError::Unsupported {
                element_type: "<i4".into(),
            })
        );
    }
}
