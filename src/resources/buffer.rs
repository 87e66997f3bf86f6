//! Light and occluder arrays with dynamic or fixed capacity

use bytemuck::Pod;

use crate::error::{LightingError, LightingResult};
use crate::BindingMode;

/// Slot count of fixed-capacity arrays
pub const MAX_FIXED_BINDINGS: usize = 82;

/// Array of evaluation records bound either as a variable-length collection or as
/// a fixed block of [`MAX_FIXED_BINDINGS`] zero-initialized slots.
///
/// The evaluator only ever sees [`GpuArray::as_slice`]. In fixed mode that slice
/// always has every slot, unused ones zeroed and therefore inert.
#[derive(Debug, Clone)]
pub struct GpuArray<T: Pod> {
    mode: BindingMode,
    items: Vec<T>,
    len: usize,
    overflow_logged: bool,
}

impl<T: Pod> GpuArray<T> {
    pub fn new(mode: BindingMode) -> Self {
        let items = match mode {
            BindingMode::Dynamic => Vec::new(),
            BindingMode::Fixed => vec![T::zeroed(); MAX_FIXED_BINDINGS],
        };
        Self {
            mode,
            items,
            len: 0,
            overflow_logged: false,
        }
    }

    pub fn mode(&self) -> BindingMode {
        self.mode
    }

    /// Maximum element count, `None` when unbounded
    pub fn capacity(&self) -> Option<usize> {
        match self.mode {
            BindingMode::Dynamic => None,
            BindingMode::Fixed => Some(MAX_FIXED_BINDINGS),
        }
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Store an element, returning its slot.
    ///
    /// A full fixed array drops the element and returns `None`. The first drop is
    /// logged.
    pub fn push(&mut self, item: T) -> Option<usize> {
        match self.try_push(item) {
            Ok(index) => Some(index),
            Err(_) => {
                if !self.overflow_logged {
                    log::warn!(
                        "Fixed binding array full ({} slots), ignoring further elements",
                        MAX_FIXED_BINDINGS
                    );
                    self.overflow_logged = true;
                }
                None
            }
        }
    }

    /// Store an element, failing when a fixed array is full
    pub fn try_push(&mut self, item: T) -> LightingResult<usize> {
        let index = self.len;
        match self.mode {
            BindingMode::Dynamic => self.items.push(item),
            BindingMode::Fixed => {
                if index >= MAX_FIXED_BINDINGS {
                    return Err(LightingError::CapacityExceeded {
                        capacity: MAX_FIXED_BINDINGS,
                    });
                }
                self.items[index] = item;
            }
        }
        self.len += 1;
        Ok(index)
    }

    /// Remove all elements, zeroing fixed slots
    pub fn clear(&mut self) {
        match self.mode {
            BindingMode::Dynamic => self.items.clear(),
            BindingMode::Fixed => self.items.fill(T::zeroed()),
        }
        self.len = 0;
        self.overflow_logged = false;
    }

    /// Every bound slot, as the evaluator reads them
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Raw bytes of every bound slot, ready for upload by a renderer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.items)
    }
}

impl<T: Pod> Extend<T> for GpuArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}
