//! National-ID masking.

/// Character substituted for every hidden position.
pub const MASK: char = '*';

/// Shortest national ID accepted.
pub const MIN_LEN: usize = 6;

/// Keep the first and last two characters of `nid` and mask the rest.
///
/// Returns `None` when `nid` is shorter than [`MIN_LEN`] characters. Length
/// counts characters, not bytes, so the output always has as many characters
/// as the input.
///
/// ```
/// use nexora_core::mask::mask_nid;
///
/// assert_eq!(mask_nid("123456789").as_deref(), Some("12*****89"));
/// assert_eq!(mask_nid("12345"), None);
/// ```
pub fn mask_nid(nid: &str) -> Option<String> {
  let chars: Vec<char> = nid.chars().collect();
  let len = chars.len();
  if len < MIN_LEN {
    return None;
  }

  let mut masked = String::with_capacity(nid.len());
  masked.extend(&chars[..2]);
  masked.extend(std::iter::repeat_n(MASK, len - 4));
  masked.extend(&chars[len - 2..]);
  Some(masked)
}
