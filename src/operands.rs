use super::registers::REGISTER_COUNT;
use std::error;
use std::fmt;

pub type Result<T> = std::result::Result<T, ResolutionError>;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum ResolutionError {
    InvalidRegister(OperandLayout, u8),
    MissingOperand(OperandLayout, &'static str),
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ResolutionError::InvalidRegister(layout, index) => write!(
                f,
                "operand '{}' refers to register {} but only R0 to R{} exist",
                layout,
                index,
                REGISTER_COUNT - 1
            ),
            ResolutionError::MissingOperand(layout, expected) => write!(
                f,
                "operand '{}' has no {} operand",
                layout, expected
            ),
        }
    }
}

impl error::Error for ResolutionError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

/*
 * OperandLayout
 * What follows the instruction byte. The operand count is also encoded in the
 * two highest bits of the instruction byte.
 */
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum OperandLayout {
    Implied,
    Register([u8; 1]),
    RegisterPair([u8; 2]),
    RegisterImmediate([u8; 2]),
}

impl OperandLayout {
    pub fn get_operands(&self) -> Vec<u8> {
        match *self {
            OperandLayout::Implied => vec![],
            OperandLayout::Register(v) => v.to_vec(),
            OperandLayout::RegisterPair(v) | OperandLayout::RegisterImmediate(v) => v.to_vec(),
        }
    }

    pub fn operand_count(&self) -> usize {
        self.get_operands().len()
    }

    /*
     * solve
     * Check every register operand points to an existing register and
     * split operands into registers and immediate value.
     */
    pub fn solve(&self) -> Result<OperandResolution> {
        let (registers, immediate) = match *self {
            OperandLayout::Implied => (vec![], None),
            OperandLayout::Register([r]) => (vec![r], None),
            OperandLayout::RegisterPair([a, b]) => (vec![a, b], None),
            OperandLayout::RegisterImmediate([r, v]) => (vec![r], Some(v)),
        };

        if let Some(index) = registers.iter().find(|r| **r as usize >= REGISTER_COUNT) {
            return Err(ResolutionError::InvalidRegister(*self, *index));
        }

        Ok(OperandResolution {
            operands: self.get_operands(),
            operand_layout: *self,
            registers,
            immediate,
        })
    }
}

impl fmt::Display for OperandLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            OperandLayout::Implied => write!(f, ""),
            OperandLayout::Register([r]) => write!(f, "R{}", r),
            OperandLayout::RegisterPair([a, b]) => write!(f, "R{},R{}", a, b),
            OperandLayout::RegisterImmediate([r, v]) => write!(f, "R{},#${:02x}", r, v),
        }
    }
}

#[derive(Debug)]
pub struct OperandResolution {
    pub operands: Vec<u8>,
    pub operand_layout: OperandLayout,
    registers: Vec<u8>,
    immediate: Option<u8>,
}

impl OperandResolution {
    pub fn register_a(&self) -> Result<u8> {
        self.registers
            .first()
            .copied()
            .ok_or(ResolutionError::MissingOperand(self.operand_layout, "register"))
    }

    pub fn register_b(&self) -> Result<u8> {
        self.registers
            .get(1)
            .copied()
            .ok_or(ResolutionError::MissingOperand(self.operand_layout, "second register"))
    }

    pub fn immediate(&self) -> Result<u8> {
        self.immediate
            .ok_or(ResolutionError::MissingOperand(self.operand_layout, "immediate"))
    }
}

impl fmt::Display for OperandResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{: <12}", format!("{}", self.operand_layout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_implied() {
        let resolution = OperandLayout::Implied.solve().unwrap();

        assert_eq!(0, resolution.operands.len());
        assert!(resolution.register_a().is_err());
        assert_eq!("", format!("{}", OperandLayout::Implied));
    }

    #[test]
    fn test_register_pair() {
        let layout = OperandLayout::RegisterPair([0x00, 0x01]);
        let resolution = layout.solve().unwrap();

        assert_eq!(vec![0x00, 0x01], resolution.operands);
        assert_eq!(0x00, resolution.register_a().unwrap());
        assert_eq!(0x01, resolution.register_b().unwrap());
        assert!(resolution.immediate().is_err());
        assert_eq!("R0,R1", format!("{}", layout));
    }

    #[test]
    fn test_register_immediate() {
        let layout = OperandLayout::RegisterImmediate([0x02, 0xf8]);
        let resolution = layout.solve().unwrap();

        assert_eq!(2, layout.operand_count());
        assert_eq!(0x02, resolution.register_a().unwrap());
        assert_eq!(0xf8, resolution.immediate().unwrap());
        assert!(resolution.register_b().is_err());
        assert_eq!("R2,#$f8", format!("{}", layout));
    }

    #[test]
    fn test_immediate_is_not_a_register() {
        // an immediate above 7 is a value, not a register index
        assert!(OperandLayout::RegisterImmediate([0x00, 0x08]).solve().is_ok());
    }

    #[test]
    fn test_invalid_register() {
        let layout = OperandLayout::RegisterPair([0x00, 0x08]);
        assert_eq!(
            ResolutionError::InvalidRegister(layout, 0x08),
            layout.solve().unwrap_err()
        );
    }
}
