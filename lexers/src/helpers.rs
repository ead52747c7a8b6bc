#![deny(warnings)]

use crate::scanner::Scanner;

/*
 * The caller of these function is expected to setup the scanner for a
 * clear start, ie: call scanner.ignore() to start fresh
 */

const DIGITS: &str = "0123456789";

// scan numbers like (0|[1-9][0-9]*)(\.[0-9]*)?
// no sign, a leading '-' or '+' is left to the caller to classify
pub fn scan_number<'a>(scanner: &mut Scanner<'a>) -> Option<&'a str> {
    let backtrack = scanner.pos();
    // a lone zero can't be followed by more integer digits
    if !scanner.accept_char('0') && scanner.accept_any_char(&DIGITS[1..]).is_some() {
        scanner.skip_all_chars(DIGITS);
    }
    if scanner.pos() == backtrack {
        return None;
    }
    // optional fractional part, possibly empty: "1." is kept for the caller to reject
    if scanner.accept_char('.') {
        scanner.skip_all_chars(DIGITS);
    }
    Some(scanner.extract())
}

// scan a single char out of the 'symbols' set
pub fn scan_symbol(scanner: &mut Scanner, symbols: &str) -> Option<char> {
    let symbol = scanner.accept_any_char(symbols)?;
    scanner.ignore();
    Some(symbol)
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_numbers() {
        let tests = vec!["987", "0", "41.98", "0.5", "3.", "10.0", "9223372036854775808"];
        for t in tests.iter() {
            let mut s = Scanner::new(t);
            assert_eq!(Some(*t), scan_number(&mut s));
            assert!(s.at_end());
        }
    }

    #[test]
    fn scan_number_prefixes() {
        let tests = vec![("012", "0", "12"), ("4-1", "4", "-1"), ("1.2.3", "1.2", ".3"), ("7 ", "7", " ")];
        for (input, number, rest) in tests.iter() {
            let mut s = Scanner::new(input);
            assert_eq!(Some(*number), scan_number(&mut s));
            assert_eq!(*rest, s.rest());
        }
    }

    #[test]
    fn no_number() {
        for t in ["-1", ".5", "", "x1", "+3"].iter() {
            let mut s = Scanner::new(t);
            assert_eq!(None, scan_number(&mut s));
            assert_eq!(0, s.pos());
        }
    }

    #[test]
    fn scan_symbols() {
        let mut s = Scanner::new("+(x");
        assert_eq!(Some('+'), scan_symbol(&mut s, "+-()"));
        assert_eq!(Some('('), scan_symbol(&mut s, "+-()"));
        assert_eq!(None, scan_symbol(&mut s, "+-()"));
        assert_eq!("x", s.rest());
    }
}
