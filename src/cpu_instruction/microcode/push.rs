use super::*;
use crate::memory::AddressableIO;

pub fn push(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.operand_layout.solve()?;
    let source = resolution.register_a()?;

    let sp = registers.decrement_stack_pointer()?;
    let value = registers.get(source)?;
    memory.write(sp as usize, &[value])?;
    registers.command_pointer += 1 + resolution.operands.len();

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[SP=0x{:02x}]", registers.stack_pointer()),
    ))
}
