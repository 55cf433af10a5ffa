//! Printable form of the encoded bytes, for labels under a rendered barcode.

use crate::error::EncodeError;
use crate::MAX_DATA_LEN;

fn push_escaped(out: &mut String, byte: u8) {
    match byte {
        0x07 => out.push_str("\\a"),
        0x08 => out.push_str("\\b"),
        b'\t' => out.push_str("\\t"),
        b'\n' => out.push_str("\\n"),
        0x0B => out.push_str("\\v"),
        0x0C => out.push_str("\\f"),
        b'\r' => out.push_str("\\r"),
        0x1B => out.push_str("\\e"),
        0x7F => out.push_str("\\?"),
        0..=0x1F => {
            out.push('^');
            out.push((byte + 0x40) as char);
        }
        _ => out.push(byte as char),
    }
}

/// Escapes control bytes of an already validated ASCII slice.
pub(crate) fn escape(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 2);
    for &byte in data {
        push_escaped(&mut out, byte);
    }
    out
}

/// Printable representation of `data`: control bytes become caret (`^A`) or
/// backslash (`\n`, `\?` for DEL) escapes, printable ASCII is kept as is.
pub fn string_representation(data: &[u8]) -> Result<String, EncodeError> {
    if data.len() > MAX_DATA_LEN {
        return Err(EncodeError::DataLengthExceeded { len: data.len() });
    }
    if let Some(position) = data.iter().position(|b| !b.is_ascii()) {
        return Err(EncodeError::CharacterInvalid { byte: data[position], position });
    }
    Ok(escape(data))
}

#[cfg(test)]
mod tests {
    use super::string_representation;
    use crate::error::EncodeError;

    #[test]
    fn test_printable_unchanged() {
        assert_eq!(string_representation(b"Hello, World!").unwrap(), "Hello, World!");
        assert_eq!(string_representation(b"").unwrap(), "");
    }

    #[test]
    fn test_control_escapes() {
        assert_eq!(string_representation(b"\x01A\x00").unwrap(), "^AA^@");
        assert_eq!(string_representation(b"a\nb\tc").unwrap(), "a\\nb\\tc");
        assert_eq!(string_representation(b"\x7F\x1B\x1F").unwrap(), "\\?\\e^_");
    }

    #[test]
    fn test_rejects() {
        assert_eq!(string_representation(&[b'a'; 21]), Err(EncodeError::DataLengthExceeded { len: 21 }));
        assert_eq!(string_representation(b"ok\xFF"), Err(EncodeError::CharacterInvalid { byte: 0xFF, position: 2 }));
    }
}
