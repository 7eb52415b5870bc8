use super::*;

pub fn ret(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.operand_layout.solve()?;

    registers.command_pointer = registers.stack_pull(memory)? as usize;

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!(
            "[CP=0x{:02x}][SP=0x{:02x}]",
            registers.command_pointer,
            registers.stack_pointer()
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;
    use crate::memory::AddressableIO;

    #[test]
    fn test_ret() {
        let cpu_instruction = CPUInstruction::new(0x40, 0x11, "RET", OperandLayout::Implied, ret);
        let (mut memory, mut registers) = get_stuff(0x40, vec![0x11]);
        memory.write(0xf3, &[0x12]).unwrap();
        registers.set_stack_pointer(0xf3);
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("RET".to_owned(), log_line.mnemonic);
        assert_eq!(0x12, registers.command_pointer);
        assert_eq!(0xf4, registers.stack_pointer());
    }

    #[test]
    fn test_ret_stack_underflow() {
        let cpu_instruction = CPUInstruction::new(0x40, 0x11, "RET", OperandLayout::Implied, ret);
        let (mut memory, mut registers) = get_stuff(0x40, vec![0x11]);
        registers.set_stack_pointer(0xff);
        assert!(cpu_instruction.execute(&mut memory, &mut registers).is_err());
        assert_eq!(0x40, registers.command_pointer);
    }
}
