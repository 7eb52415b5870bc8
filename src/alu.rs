use super::registers::{RegisterError, Registers};
use std::error;
use std::fmt;

/*
 * ALU instructions have bit 5 of the instruction byte set, the lowest nibble
 * selects the operation.
 */
pub const ALU_FLAG: u8 = 0b00100000;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum AluError {
    UnsupportedOperation(u8),
    Register(RegisterError),
}

impl fmt::Display for AluError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            AluError::UnsupportedOperation(opcode) => {
                write!(f, "unsupported ALU operation 0b{:08b}", opcode)
            }
            AluError::Register(e) => write!(f, "register error in ALU: {}", e),
        }
    }
}

impl error::Error for AluError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

impl std::convert::From<RegisterError> for AluError {
    fn from(err: RegisterError) -> AluError {
        AluError::Register(err)
    }
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum AluOperation {
    Add,
    Mul,
    Cmp,
}

impl AluOperation {
    pub fn from_opcode(opcode: u8) -> Result<AluOperation, AluError> {
        if opcode & ALU_FLAG == 0 {
            return Err(AluError::UnsupportedOperation(opcode));
        }

        match opcode & 0x0f {
            0x00 => Ok(AluOperation::Add),
            0x02 => Ok(AluOperation::Mul),
            0x07 => Ok(AluOperation::Cmp),
            _ => Err(AluError::UnsupportedOperation(opcode)),
        }
    }
}

/*
 * apply
 * run the ALU operation selected by the opcode on registers A and B.
 * Arithmetic results wrap to 8 bits and are stored in register A, comparisons
 * only touch the flags register.
 */
pub fn apply(
    opcode: u8,
    reg_a: u8,
    reg_b: u8,
    registers: &mut Registers,
) -> Result<AluOperation, AluError> {
    let operation = AluOperation::from_opcode(opcode)?;
    let a = registers.get(reg_a)?;
    let b = registers.get(reg_b)?;

    match operation {
        AluOperation::Add => registers.set(reg_a, a.wrapping_add(b))?,
        AluOperation::Mul => registers.set(reg_a, a.wrapping_mul(b))?,
        AluOperation::Cmp => registers.set_comparison(a.cmp(&b)),
    }

    Ok(operation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::{FLAG_EQUAL, FLAG_GREATER_THAN, FLAG_LESS_THAN};

    fn registers_with(a: u8, b: u8) -> Registers {
        let mut registers = Registers::default();
        registers.set(0, a).unwrap();
        registers.set(1, b).unwrap();

        registers
    }

    #[test]
    fn test_add_wraps() {
        let mut registers = registers_with(200, 100);
        assert_eq!(AluOperation::Add, apply(0xa0, 0, 1, &mut registers).unwrap());
        assert_eq!(44, registers.get(0).unwrap());
        assert_eq!(100, registers.get(1).unwrap());
    }

    #[test]
    fn test_mul_wraps() {
        let mut registers = registers_with(0x10, 0x11);
        apply(0xa2, 0, 1, &mut registers).unwrap();
        assert_eq!(0x10, registers.get(0).unwrap());

        let mut registers = registers_with(8, 9);
        apply(0xa2, 0, 1, &mut registers).unwrap();
        assert_eq!(72, registers.get(0).unwrap());
    }

    #[test]
    fn test_cmp() {
        let mut registers = registers_with(5, 5);
        apply(0xa7, 0, 1, &mut registers).unwrap();
        assert_eq!(FLAG_EQUAL, registers.flags_register);

        let mut registers = registers_with(6, 5);
        apply(0xa7, 0, 1, &mut registers).unwrap();
        assert_eq!(FLAG_GREATER_THAN, registers.flags_register);

        let mut registers = registers_with(4, 5);
        apply(0xa7, 0, 1, &mut registers).unwrap();
        assert_eq!(FLAG_LESS_THAN, registers.flags_register);
        assert_eq!(4, registers.get(0).unwrap());
    }

    #[test]
    fn test_cmp_after_equal_clears_equal() {
        let mut registers = registers_with(5, 5);
        apply(0xa7, 0, 1, &mut registers).unwrap();
        registers.set(0, 9).unwrap();
        apply(0xa7, 0, 1, &mut registers).unwrap();
        assert!(!registers.e_flag_is_set());
        assert!(registers.g_flag_is_set());
    }

    #[test]
    fn test_unsupported_operation() {
        let mut registers = registers_with(1, 1);
        // DIV in the LS-8 encoding
        assert_eq!(
            AluError::UnsupportedOperation(0xa3),
            apply(0xa3, 0, 1, &mut registers).unwrap_err()
        );
        // LDI is not an ALU instruction
        assert_eq!(
            AluError::UnsupportedOperation(0x82),
            apply(0x82, 0, 1, &mut registers).unwrap_err()
        );
    }

    #[test]
    fn test_invalid_register() {
        let mut registers = registers_with(1, 1);
        assert_eq!(
            AluError::Register(RegisterError::InvalidIndex(9)),
            apply(0xa0, 0, 9, &mut registers).unwrap_err()
        );
    }
}
