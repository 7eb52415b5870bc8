use super::*;

pub struct RAM {
    ram: Box<[u8; MEMMAX + 1]>,
}

impl Default for RAM {
    fn default() -> Self {
        Self {
            ram: Box::new([0x00; MEMMAX + 1]),
        }
    }
}

impl RAM {
    /*
     * the end of a [addr; addr + len[ range if it stays inside the memory
     */
    fn range_end(&self, addr: usize, len: usize) -> Option<usize> {
        addr.checked_add(len).filter(|end| *end <= self.ram.len())
    }
}

impl AddressableIO for RAM {
    fn read(&self, addr: usize, len: usize) -> Result<Vec<u8>, MemoryError> {
        match self.range_end(addr, len) {
            Some(end) if addr < self.ram.len() => Ok(self.ram[addr..end].to_vec()),
            _ => Err(MemoryError::ReadOverflow(len, addr, self.ram.len())),
        }
    }

    fn write(&mut self, location: usize, data: &[u8]) -> Result<(), MemoryError> {
        match self.range_end(location, data.len()) {
            Some(end) if location < self.ram.len() => {
                self.ram[location..end].copy_from_slice(data);

                Ok(())
            }
            _ => Err(MemoryError::WriteOverflow(
                data.len(),
                location,
                self.ram.len(),
            )),
        }
    }

    fn get_size(&self) -> usize {
        self.ram.len()
    }
}
