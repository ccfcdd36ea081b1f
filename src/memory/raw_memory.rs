use std::ops::{Index, IndexMut, Range};

// A chunk of primitive memory. Allows indexing on u32s instead of usizes.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RawMemory(Vec<u8>);

impl RawMemory {
    pub fn new(size: u32) -> Self {
        Self(vec![0; size as usize])
    }

    pub fn from_vec(vec: Vec<u8>) -> Self {
        assert!(u32::try_from(vec.len()).is_ok(), "RawMemory can't exceed 4GiB.");
        Self(vec)
    }

    pub fn size(&self) -> u32 {
        self.0.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0[..]
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.0[..]
    }

    pub fn get(&self, index: u32) -> Option<u8> {
        self.0.get(index as usize).copied()
    }

    pub fn get_mut(&mut self, index: u32) -> Option<&mut u8> {
        self.0.get_mut(index as usize)
    }

    pub fn slice(&self, range: Range<u32>) -> RawMemory {
        RawMemory(self.0[range.start as usize..range.end as usize].to_vec())
    }

    // Repeat the contents until they fill `size` bytes. Small images show up on every
    // mirror of the bank they are placed in.
    pub fn mirrored_to(&self, size: u32) -> RawMemory {
        if self.0.is_empty() || self.size() >= size {
            return self.clone();
        }

        RawMemory(self.0.iter().copied().cycle().take(size as usize).collect())
    }

    // Copy the start of `other` over the start of this memory.
    pub fn overlay(&mut self, other: &RawMemory) {
        let len = std::cmp::min(self.0.len(), other.0.len());
        self.0[..len].copy_from_slice(&other.0[..len]);
    }
}

impl Index<u32> for RawMemory {
    type Output = u8;

    fn index(&self, index: u32) -> &u8 {
        &self.0[index as usize]
    }
}

impl IndexMut<u32> for RawMemory {
    fn index_mut(&mut self, index: u32) -> &mut u8 {
        &mut self.0[index as usize]
    }
}
