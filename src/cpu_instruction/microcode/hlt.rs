use super::*;

pub fn hlt(
    _memory: &mut Memory,
    _registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.operand_layout.solve()?;

    Ok(LogLine::new(cpu_instruction, resolution, String::new()).with_signal(Signal::Halt))
}
