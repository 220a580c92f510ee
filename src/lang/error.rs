#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    line: Option<usize>,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line: None,
            message: "",
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn is_code(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn in_line(&self, line: usize) -> Error {
        debug_assert!(self.line.is_none());
        Error {
            code: self.code,
            line: Some(line),
            message: self.message,
        }
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            line: self.line,
            message,
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum ErrorCode {
    IllegalInstruction = 1,
    OperandMustBeSymbolic = 2,
    OperandMustBeNumeric = 3,
    UndefinedLabel = 4,
    MultiplyDefinedLabel = 5,
    AddressTooLarge = 6,
    ValueTooLarge = 7,
    ExtraOperand = 8,
    DuplicateMemoryWrite = 9,
    MissingEndStatement = 10,
    EndStatementNotLast = 11,
    StoreOverflow = 12,
    DivisionByZero = 13,
    InternalError = 51,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "ILLEGAL INSTRUCTION",
            2 => "OPERAND MUST BE SYMBOLIC",
            3 => "OPERAND MUST BE NUMERIC",
            4 => "LABEL IS UNDEFINED",
            5 => "LABEL IS MULTIPLY DEFINED",
            6 => "ADDRESS TOO LARGE",
            7 => "VALUE TOO LARGE",
            8 => "EXTRA OPERAND",
            9 => "DUPLICATE MEMORY WRITE",
            10 => "MISSING END STATEMENT",
            11 => "END STATEMENT NOT LAST",
            12 => "STORE OVERFLOW",
            13 => "DIVISION BY ZERO",
            51 => "INTERNAL ERROR",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(line) = self.line {
            suffix.push_str(&format!(" IN LINE {}", line));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}
