use super::*;

pub fn jeq(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.operand_layout.solve()?;
    let target_address = registers.get(resolution.register_a()?)?;

    if registers.e_flag_is_set() {
        registers.command_pointer = target_address as usize;
    } else {
        registers.command_pointer += 1 + resolution.operands.len();
    }

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[CP=0x{:02x}]", registers.command_pointer),
    ))
}
