use super::number::Number;

/// Single-slot storage behind the M+, MR and MC keys.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemoryRegister {
    value: Number,
}

impl MemoryRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&mut self, value: f64) {
        self.value = Number::Float(value);
    }

    pub fn clear(&mut self) {
        self.value = Number::default();
    }

    pub fn recall(&self) -> Number {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_integer_zero() {
        assert_eq!(MemoryRegister::new().recall().to_string(), "0");
    }

    #[test]
    fn test_store_overwrites() {
        let mut mem = MemoryRegister::new();
        mem.store(7.5);
        mem.store(2.0);
        assert_eq!(mem.recall(), Number::Float(2.0));
        assert_eq!(mem.recall().to_string(), "2.0");
    }

    #[test]
    fn test_clear_resets() {
        let mut mem = MemoryRegister::new();
        mem.store(7.5);
        mem.clear();
        assert_eq!(mem.recall(), Number::Integer(0));
    }
}
