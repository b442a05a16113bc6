//! Lenient numeric parsing for form input and the point slot.
//!
//! Form fields are never rejected for being non-numeric: the longest numeric
//! prefix is used (after leading whitespace), and anything without one reads
//! as zero.

/// Leading-integer parse: `" 42abc"` → 42, `"-7"` → -7, `"abc"` → 0.
pub fn lenient_int(input: &str) -> i64 {
  let s = input.trim_start();
  let (negative, digits) = split_sign(s);
  let end = digits
    .find(|c: char| !c.is_ascii_digit())
    .unwrap_or(digits.len());
  let magnitude = digits[..end]
    .bytes()
    .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));
  if negative { -magnitude } else { magnitude }
}

/// Leading-decimal parse: `"72.5kg"` → 72.5, `".5"` → 0.5, `"1e3"` → 1000,
/// `"kg"` → 0.
pub fn lenient_float(input: &str) -> f64 {
  let s = input.trim_start();
  let bytes = s.as_bytes();
  let mut end = 0;

  if matches!(bytes.first(), Some(b'+' | b'-')) {
    end += 1;
  }
  let int_start = end;
  while bytes.get(end).is_some_and(u8::is_ascii_digit) {
    end += 1;
  }
  let mut mantissa_digits = end - int_start;
  if bytes.get(end) == Some(&b'.') {
    let frac_start = end + 1;
    let mut frac_end = frac_start;
    while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
      frac_end += 1;
    }
    mantissa_digits += frac_end - frac_start;
    if mantissa_digits > 0 {
      end = frac_end;
    }
  }
  if mantissa_digits == 0 {
    return 0.0;
  }
  if matches!(bytes.get(end), Some(b'e' | b'E')) {
    let mut exp_end = end + 1;
    if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
      exp_end += 1;
    }
    let exp_digits_start = exp_end;
    while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
      exp_end += 1;
    }
    if exp_end > exp_digits_start {
      end = exp_end;
    }
  }

  s[..end].parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

fn split_sign(s: &str) -> (bool, &str) {
  if let Some(rest) = s.strip_prefix('-') {
    (true, rest)
  } else {
    (false, s.strip_prefix('+').unwrap_or(s))
  }
}
