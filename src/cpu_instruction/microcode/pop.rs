use super::*;
use crate::memory::AddressableIO;

pub fn pop(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.operand_layout.solve()?;
    let target = resolution.register_a()?;

    let previous = registers.get(target)?;
    let value = memory.read(registers.stack_pointer() as usize, 1)?[0];
    registers.set(target, value)?;
    if let Err(e) = registers.increment_stack_pointer() {
        registers.set(target, previous)?;
        return Err(e.into());
    }
    registers.command_pointer += 1 + resolution.operands.len();

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!(
            "[R{}=0x{:02x}][SP=0x{:02x}]",
            target,
            value,
            registers.stack_pointer()
        ),
    ))
}
