use crate::errors::read_error::ReadError;
use std::sync::RwLock;

struct ReadGroupBuffers {
    current_values: Vec<u8>,
    previous_values: Vec<u8>,
    can_compare: bool,
}

/// The owning container of bytes for one contiguous span of target-process virtual memory.
/// Multiple `SnapshotRegion`s may view into the same `ReadGroup`. Buffers are empty until the
/// first successful read, matching the teacher's "empty vec means none yet" convention rather
/// than `Option<Vec<u8>>`.
pub struct ReadGroup {
    base_address: u64,
    size: usize,
    buffers: RwLock<ReadGroupBuffers>,
}

impl ReadGroup {
    pub fn new(
        base_address: u64,
        size: usize,
    ) -> Self {
        Self {
            base_address,
            size,
            buffers: RwLock::new(ReadGroupBuffers {
                current_values: Vec::new(),
                previous_values: Vec::new(),
                can_compare: false,
            }),
        }
    }

    pub fn get_base_address(&self) -> u64 {
        self.base_address
    }

    pub fn get_size(&self) -> usize {
        self.size
    }

    /// Swaps `current_values` into `previous_values`, then reads a fresh `current_values` via
    /// the injected callback. A short read clears `can_compare` for the group until a future
    /// read completes in full; a fatal read propagates to the caller immediately.
    pub fn read_all<F>(
        &self,
        reader: F,
    ) -> Result<(), ReadError>
    where
        F: FnOnce(u64, usize, &mut [u8]) -> Result<usize, ReadError>,
    {
        let mut buffers = self.buffers.write().unwrap();
        let had_previous = !buffers.current_values.is_empty();

        std::mem::swap(&mut buffers.current_values, &mut buffers.previous_values);

        if buffers.current_values.len() != self.size {
            buffers.current_values = vec![0u8; self.size];
        }

        match reader(self.base_address, self.size, &mut buffers.current_values) {
            Ok(read) if read == self.size => {
                buffers.can_compare = had_previous;
                Ok(())
            }
            Ok(read) => {
                buffers.can_compare = false;
                Err(ReadError::ShortRead {
                    read,
                    requested: self.size,
                })
            }
            Err(error) => {
                buffers.can_compare = false;
                Err(error)
            }
        }
    }

    /// Pads both buffers (if present) so that the last SIMD load of `vector_size` bytes starting
    /// anywhere within `[0, size)` stays in-bounds. Padding is deterministic zero and does not
    /// change the logical `size`.
    pub fn resize_for_safe_reading(
        &self,
        vector_size: usize,
    ) {
        let mut buffers = self.buffers.write().unwrap();
        let padded_len = self.size.saturating_add(vector_size);

        if !buffers.current_values.is_empty() && buffers.current_values.len() < padded_len {
            buffers.current_values.resize(padded_len, 0);
        }
        if !buffers.previous_values.is_empty() && buffers.previous_values.len() < padded_len {
            buffers.previous_values.resize(padded_len, 0);
        }
    }

    pub fn can_compare(&self) -> bool {
        self.buffers.read().unwrap().can_compare
    }

    pub fn has_current_values(&self) -> bool {
        !self.buffers.read().unwrap().current_values.is_empty()
    }

    /// Pointer to the start of the current-values buffer. Valid as long as no concurrent writer
    /// resizes the buffer; the scan phase is read-only by contract (see concurrency model), so
    /// this lock is held only momentarily to fetch the pointer.
    pub fn get_current_values_ptr(&self) -> *const u8 {
        self.buffers.read().unwrap().current_values.as_ptr()
    }

    pub fn get_previous_values_ptr(&self) -> *const u8 {
        self.buffers.read().unwrap().previous_values.as_ptr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_all_marks_uncomparable_on_first_read() {
        let read_group = ReadGroup::new(0x1000, 4);
        read_group.read_all(|_, size, out| {
            out[..size].copy_from_slice(&[1, 2, 3, 4]);
            Ok(size)
        }).unwrap();

        assert!(!read_group.can_compare());
    }

    #[test]
    fn read_all_marks_comparable_after_second_full_read() {
        let read_group = ReadGroup::new(0x1000, 4);
        read_group.read_all(|_, size, out| {
            out[..size].copy_from_slice(&[1, 2, 3, 4]);
            Ok(size)
        }).unwrap();
        read_group.read_all(|_, size, out| {
            out[..size].copy_from_slice(&[5, 6, 7, 8]);
            Ok(size)
        }).unwrap();

        assert!(read_group.can_compare());
    }

    #[test]
    fn short_read_clears_can_compare() {
        let read_group = ReadGroup::new(0x1000, 4);
        read_group.read_all(|_, size, out| {
            out[..size].copy_from_slice(&[1, 2, 3, 4]);
            Ok(size)
        }).unwrap();

        let result = read_group.read_all(|_, _, out| {
            out[0] = 9;
            Ok(1)
        });

        assert!(result.is_err());
        assert!(!read_group.can_compare());
    }

    #[test]
    fn resize_for_safe_reading_pads_without_changing_logical_size() {
        let read_group = ReadGroup::new(0x1000, 4);
        read_group.read_all(|_, size, out| {
            out[..size].copy_from_slice(&[1, 2, 3, 4]);
            Ok(size)
        }).unwrap();

        read_group.resize_for_safe_reading(32);

        assert_eq!(read_group.get_size(), 4);
    }
}
