#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceMap(
    // The indices of this vector are the new facelet indexes.
    // The values are the old facelet indexes to pull colors from.
    pub Vec<usize>,
);

impl FaceMap {
    pub fn identity(count: usize) -> FaceMap {
        FaceMap((0..count).collect())
    }

    /// Apply another FaceMap after this one.
    /// Returns a new FaceMap that represents the combination.
    pub fn apply(&self, other: &FaceMap) -> FaceMap {
        FaceMap(
            other
                .0
                .iter()
                .map(|index_from_other| self.0[*index_from_other])
                .collect(),
        )
    }

    pub fn invert(&self) -> FaceMap {
        let mut inverted = vec![0; self.0.len()];
        for (new_index, old_index) in self.0.iter().enumerate() {
            inverted[*old_index] = new_index;
        }
        FaceMap(inverted)
    }

    /// This FaceMap applied `times` times in a row
    pub fn repeat(&self, times: usize) -> FaceMap {
        (0..times).fold(FaceMap::identity(self.0.len()), |combined, _| {
            combined.apply(self)
        })
    }

    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(i, old_index)| i == *old_index)
    }

    /// Each group in `strips` pulls its colors from the next group,
    /// and the last group pulls from the first.
    /// Positions are pulled from the same offset in the neighboring group.
    pub fn cycle_strips(&mut self, strips: &[[usize; 3]]) {
        let original = self.0.clone();
        for (i, receiving) in strips.iter().enumerate() {
            let giving = &strips[(i + 1) % strips.len()];
            for (to, from) in receiving.iter().zip(giving.iter()) {
                self.0[*to] = original[*from];
            }
        }
    }

    /// Map a state (or anything indexed by facelet) through this FaceMap
    pub fn permute<T: Copy>(&self, previous: &[T]) -> Vec<T> {
        self.0.iter().map(|old_index| previous[*old_index]).collect()
    }
}
