use super::{Directive, Opcode, Word, MAX_WORD};

pub fn classify(line: &str) -> Inst {
    Inst::classify(line)
}

/// What a source line turned out to be.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Kind {
    /// A machine language instruction with its resolved opcode.
    Machine(Opcode),
    /// An assembler directive.
    Directive(Directive),
    /// Blank line or comment. Occupies no location.
    Comment,
    /// The `end` statement.
    End,
    /// Unrecognized mnemonic.
    Invalid,
}

/// One classified source line. Built fresh for every line and never
/// mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Inst {
    statement: String,
    label: Option<String>,
    opcode: String,
    operand: Option<String>,
    operand_value: Option<Word>,
    extra_operand: bool,
    kind: Kind,
}

impl Inst {
    fn classify(line: &str) -> Inst {
        let mut inst = Inst {
            statement: line.to_string(),
            label: None,
            opcode: String::new(),
            operand: None,
            operand_value: None,
            extra_operand: false,
            kind: Kind::Comment,
        };

        // A leading semicolon makes the entire line a comment.
        if line.starts_with(';') {
            return inst;
        }

        // Otherwise the comment is stripped before tokenizing.
        let text = match line.find(';') {
            Some(at) => &line[..at],
            None => line,
        };

        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.is_empty() {
            return inst;
        }

        // Three or more tokens means a label is present.
        let fields: &[&str] = if tokens.len() >= 3 {
            inst.label = Some(tokens[0].to_string());
            &tokens[1..]
        } else {
            &tokens[..]
        };

        inst.opcode = fields[0].to_string();
        if let Some(operand) = fields.get(1) {
            inst.operand = Some(operand.to_string());
            inst.operand_value = numeric_value(operand);
        }
        inst.extra_operand = fields.len() > 2;

        inst.kind = if inst.opcode.eq_ignore_ascii_case("end") {
            Kind::End
        } else if let Some(opcode) = Opcode::from_mnemonic(&inst.opcode) {
            Kind::Machine(opcode)
        } else if let Some(directive) = Directive::from_mnemonic(&inst.opcode) {
            Kind::Directive(directive)
        } else {
            Kind::Invalid
        };
        inst
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The original line, preserved for the translation listing.
    pub fn statement(&self) -> &str {
        &self.statement
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn operand(&self) -> Option<&str> {
        self.operand.as_deref()
    }

    /// The operand as an integer, when it is an unsigned decimal literal.
    pub fn operand_value(&self) -> Option<Word> {
        self.operand_value
    }

    pub fn has_extra_operand(&self) -> bool {
        self.extra_operand
    }

    /// Location of the next instruction. `org` jumps to its operand and
    /// `ds` reserves storage; everything else occupies one word. A
    /// non-numeric operand counts as zero, keeping both passes in
    /// agreement while pass 2 reports the error.
    pub fn next_location(&self, loc: Word) -> Word {
        let value = self.operand_value.unwrap_or(0);
        match self.kind {
            Kind::Directive(Directive::Org) => value,
            Kind::Directive(Directive::Ds) => loc.saturating_add(value),
            _ => loc.saturating_add(1),
        }
    }
}

fn numeric_value(token: &str) -> Option<Word> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Clamp oversized literals to one past the largest word. Every
    // too-large check still fires and location arithmetic cannot
    // overflow.
    let value = token.parse::<Word>().unwrap_or(MAX_WORD + 1);
    Some(value.min(MAX_WORD + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_instruction() {
        let inst = classify(" add x");
        assert_eq!(inst.kind(), Kind::Machine(Opcode::Add));
        assert_eq!(inst.label(), None);
        assert_eq!(inst.operand(), Some("x"));
        assert_eq!(inst.operand_value(), None);
        assert!(!inst.has_extra_operand());
    }

    #[test]
    fn test_labeled_instruction() {
        let inst = classify("loop load x");
        assert_eq!(inst.kind(), Kind::Machine(Opcode::Load));
        assert_eq!(inst.label(), Some("loop"));
        assert_eq!(inst.operand(), Some("x"));
    }

    #[test]
    fn test_case_insensitive_mnemonic() {
        assert_eq!(classify(" MuLt y").kind(), Kind::Machine(Opcode::Mult));
        assert_eq!(classify("x Dc 5").kind(), Kind::Directive(Directive::Dc));
    }

    #[test]
    fn test_numeric_operand() {
        let inst = classify("buf ds 100");
        assert_eq!(inst.kind(), Kind::Directive(Directive::Ds));
        assert_eq!(inst.operand_value(), Some(100));
    }

    #[test]
    fn test_operand_with_sign_is_not_numeric() {
        assert_eq!(classify("x dc -5").operand_value(), None);
        assert_eq!(classify("x dc 1.5").operand_value(), None);
    }

    #[test]
    fn test_comment_line() {
        assert_eq!(classify("; a comment").kind(), Kind::Comment);
        assert_eq!(classify("").kind(), Kind::Comment);
        assert_eq!(classify("   ").kind(), Kind::Comment);
    }

    #[test]
    fn test_trailing_comment_stripped() {
        let inst = classify(" add x ; increments");
        assert_eq!(inst.kind(), Kind::Machine(Opcode::Add));
        assert_eq!(inst.operand(), Some("x"));
        assert!(!inst.has_extra_operand());
        assert_eq!(inst.statement(), " add x ; increments");
    }

    #[test]
    fn test_extra_operand() {
        let inst = classify("x add y z");
        assert_eq!(inst.label(), Some("x"));
        assert!(inst.has_extra_operand());
    }

    #[test]
    fn test_end_statement() {
        assert_eq!(classify(" end").kind(), Kind::End);
        assert_eq!(classify("last END 0").kind(), Kind::End);
    }

    #[test]
    fn test_invalid_mnemonic() {
        assert_eq!(classify(" bogus x").kind(), Kind::Invalid);
    }

    #[test]
    fn test_oversized_literal_clamps() {
        // Twenty digits will not parse as a word; near-max literals do.
        let inst = classify(" ds 99999999999999999999");
        assert_eq!(inst.operand_value(), Some(MAX_WORD + 1));
        let inst = classify(" org 9223372036854775807");
        assert_eq!(inst.operand_value(), Some(MAX_WORD + 1));
    }

    #[test]
    fn test_next_location_saturates() {
        assert_eq!(classify(" ds 5").next_location(Word::MAX), Word::MAX);
        assert_eq!(classify(" add x").next_location(Word::MAX), Word::MAX);
    }

    #[test]
    fn test_next_location() {
        assert_eq!(classify(" add x").next_location(5), 6);
        assert_eq!(classify(" ds 10").next_location(5), 15);
        assert_eq!(classify(" org 100").next_location(5), 100);
        assert_eq!(classify("x dc 7").next_location(5), 6);
    }
}
