use super::*;

pub fn call(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.operand_layout.solve()?;
    let target_address = registers.get(resolution.register_a()?)?;

    let return_address = registers.command_pointer + 1 + resolution.operands.len();
    let return_address = u8::try_from(return_address).map_err(|_| {
        MemoryError::Other(return_address, "return address is beyond the end of memory")
    })?;
    registers.stack_push(memory, return_address)?;
    registers.command_pointer = target_address as usize;

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
    fn test_call() {
        let cpu_instruction =
            CPUInstruction::new(0x10, 0x50, "CALL", OperandLayout::Register([0x01]), call);
        let (mut memory, mut registers) = get_stuff(0x10, vec![0x50, 0x01]);
        registers.set(1, 0x40).unwrap();
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("CALL".to_owned(), log_line.mnemonic);
        assert_eq!(0x40, registers.command_pointer);
        assert_eq!(0xf3, registers.stack_pointer());
        assert_eq!(vec![0x12], memory.read(0xf3, 1).unwrap());
    }

    #[test]
    fn test_call_return_address_overflow() {
        let cpu_instruction =
            CPUInstruction::new(0xfe, 0x50, "CALL", OperandLayout::Register([0x01]), call);
        let (mut memory, mut registers) = get_stuff(0xfe, vec![0x50, 0x01]);
        assert!(matches!(
            cpu_instruction.execute(&mut memory, &mut registers),
            Err(MicrocodeError::MemoryOverflow(MemoryError::Other(0x100, _)))
        ));
        assert_eq!(0xf4, registers.stack_pointer());
        assert_eq!(0xfe, registers.command_pointer);
    }

    #[test]
    fn test_call_stack_overflow() {
        let cpu_instruction =
            CPUInstruction::new(0x10, 0x50, "CALL", OperandLayout::Register([0x01]), call);
        let (mut memory, mut registers) = get_stuff(0x10, vec![0x50, 0x01]);
        registers.set_stack_pointer(0x00);
        assert!(matches!(
            cpu_instruction.execute(&mut memory, &mut registers),
            Err(MicrocodeError::MemoryOverflow(MemoryError::StackOverflow(0x00)))
        ));
        assert_eq!(0x10, registers.command_pointer);
    }
}
