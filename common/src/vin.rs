/// VIN well-formedness check: exactly 17 characters from the VIN
/// alphabet, which excludes I, O and Q to avoid digit confusion.
pub fn is_valid(vin: &str) -> bool {
    vin.len() == 17
        && vin
            .chars()
            .all(|c| matches!(c, 'A'..='Z' | '0'..='9') && !matches!(c, 'I' | 'O' | 'Q'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_well_formed_vin() {
        assert!(is_valid("1HGBH41JXMN109186"));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!is_valid("1HGBH41JXMN10918"));
        assert!(!is_valid("1HGBH41JXMN1091867"));
        assert!(!is_valid(""));
    }

    #[test]
    fn rejects_forbidden_characters() {
        assert!(!is_valid("IHGBH41JXMN109186"));
        assert!(!is_valid("OHGBH41JXMN109186"));
        assert!(!is_valid("QHGBH41JXMN109186"));
        assert!(!is_valid("1hgbh41jxmn109186"));
        assert!(!is_valid("1HGBH41JX-N109186"));
    }
}
