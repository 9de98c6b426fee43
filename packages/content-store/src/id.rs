//! Record identifier generation.

use std::fmt::Write;

use rand::rngs::OsRng;
use rand::RngCore;

/// Hex digit counts of the five hyphen-separated groups.
const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

/// Generates a random record identifier.
///
/// Sixteen bytes are drawn from the operating system CSPRNG and rendered as
/// lower-case hex in `8-4-4-4-12` groups. The result looks like a UUID but
/// carries no version bits. Uniqueness is probabilistic; callers do not
/// check for collisions.
///
/// # Panics
/// Panics if the operating system cannot supply randomness.
pub fn generate_id() -> String {
    let mut bytes = [0u8; 16];
    OsRng.fill_bytes(&mut bytes);
    format_id(&bytes)
}

fn format_id(bytes: &[u8; 16]) -> String {
    let mut out = String::with_capacity(36);
    let mut pos = 0;
    for (i, digits) in GROUPS.iter().enumerate() {
        if i > 0 {
            out.push('-');
        }
        for byte in &bytes[pos..pos + digits / 2] {
            // Writing to a String cannot fail
            let _ = write!(out, "{:02x}", byte);
        }
        pos += digits / 2;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_format_id_groups() {
        let bytes: [u8; 16] = [
            0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd,
            0xee, 0xff,
        ];
        assert_eq!(format_id(&bytes), "00112233-4455-6677-8899-aabbccddeeff");
    }

    #[test]
    fn test_generate_id_shape() {
        let id = generate_id();
        assert_eq!(id.len(), 36);
        let groups: Vec<&str> = id.split('-').collect();
        let lens: Vec<usize> = groups.iter().map(|g| g.len()).collect();
        assert_eq!(lens, vec![8, 4, 4, 4, 12]);
        assert!(groups
            .iter()
            .all(|g| g.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())));
    }

    #[test]
    fn test_generate_id_unique() {
        let ids: HashSet<String> = (0..10_000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 10_000);
    }
}
