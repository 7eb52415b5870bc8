use super::*;

pub fn jmp(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.operand_layout.solve()?;

    registers.command_pointer = registers.get(resolution.register_a()?)? as usize;

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[CP=0x{:02x}]", registers.command_pointer),
    ))
}
