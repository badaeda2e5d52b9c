/// Dense square matrix of optional cells, stored row-major.
///
/// The capacity is always zero or a power of two and only ever grows.
/// Cells outside of the used `len × len` square are always empty.
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    data: Vec<Option<T>>,
    capacity: usize,
}

impl<T> Matrix<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            0
        } else {
            capacity.next_power_of_two()
        };

        let mut data = Vec::with_capacity(capacity * capacity);
        data.resize_with(capacity * capacity, || None);

        Self { data, capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Grows the matrix so that it can hold at least `len × len` cells. The
    /// coordinates of existing cells are preserved.
    pub fn ensure_capacity(&mut self, len: usize) {
        if len <= self.capacity {
            return;
        }

        let capacity = len.next_power_of_two().max(self.capacity * 2);
        log::trace!("growing matrix capacity from {} to {}", self.capacity, capacity);
        self.resize(capacity);
    }

    fn resize(&mut self, capacity: usize) {
        let prev_capacity = self.capacity;
        let mut next = Vec::with_capacity(capacity * capacity);

        // Keep the original square in the top-left corner.
        for (i, value) in std::mem::take(&mut self.data).into_iter().enumerate() {
            next.push(value);

            // Are we on the right edge of the original square?
            if (i + 1) % prev_capacity == 0 {
                next.resize_with(next.len() + capacity - prev_capacity, || None);
            }
        }

        // Add the bottom rectangle.
        next.resize_with(capacity * capacity, || None);

        self.data = next;
        self.capacity = capacity;
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.capacity && col < self.capacity);
        row * self.capacity + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.data[self.index(row, col)].as_ref()
    }

    pub fn insert(&mut self, row: usize, col: usize, value: T) -> Option<T> {
        let index = self.index(row, col);
        self.data[index].replace(value)
    }

    pub fn remove(&mut self, row: usize, col: usize) -> Option<T> {
        let index = self.index(row, col);
        self.data[index].take()
    }

    /// Moves the cell at `from` to `to`, leaving `from` empty. The previous
    /// content of `to` is dropped.
    pub fn relocate(&mut self, from: (usize, usize), to: (usize, usize)) {
        let value = self.remove(from.0, from.1);
        let index = self.index(to.0, to.1);
        self.data[index] = value;
    }

    /// Empties all cells, keeping the capacity.
    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|cell| *cell = None);
    }
}
