use super::*;

pub fn ldi(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.operand_layout.solve()?;
    let target = resolution.register_a()?;
    let value = resolution.immediate()?;

    registers.set(target, value)?;
    registers.command_pointer += 1 + resolution.operands.len();

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[R{}=0x{:02x}]", target, value),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_ldi() {
        let cpu_instruction = CPUInstruction::new(
            0x00,
            0x82,
            "LDI",
            OperandLayout::RegisterImmediate([0x02, 0x08]),
            ldi,
        );
        let (mut memory, mut registers) = get_stuff(0x00, vec![0x82, 0x02, 0x08]);
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("LDI".to_owned(), log_line.mnemonic);
        assert_eq!(0x08, registers.get(2).unwrap());
        assert_eq!(0x03, registers.command_pointer);
        assert_eq!(None, log_line.signal);
        assert_eq!(
            "#0x00: (82 02 08)   LDI  R2,#$08       [R2=0x08]",
            format!("{}", log_line)
        );
    }

    #[test]
    fn test_ldi_invalid_register() {
        let cpu_instruction = CPUInstruction::new(
            0x00,
            0x82,
            "LDI",
            OperandLayout::RegisterImmediate([0x08, 0x01]),
            ldi,
        );
        let (mut memory, mut registers) = get_stuff(0x00, vec![0x82, 0x08, 0x01]);
        assert!(matches!(
            cpu_instruction.execute(&mut memory, &mut registers),
            Err(MicrocodeError::Resolution(ResolutionError::InvalidRegister(_, 0x08)))
        ));
        assert_eq!(0x00, registers.command_pointer);
    }
}
