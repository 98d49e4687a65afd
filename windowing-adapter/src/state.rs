use alloc::string::String;

#[cfg(feature = "std")]
type StateMap = std::collections::HashMap<String, FrameState>;
#[cfg(not(feature = "std"))]
type StateMap = alloc::collections::BTreeMap<String, FrameState>;

/// What the observer knew about the scroll axis at snapshot time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: i64,
    pub is_scrolling: bool,
}

/// Everything needed to bring a view back after it was unmounted: the viewport extent the
/// window was computed for and the scroll reading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub viewport_extent: u32,
    pub scroll: ScrollState,
}

/// Where views park their [`FrameState`] between mounts.
///
/// The store is an explicit object owned by the caller and handed to each view by
/// reference; its lifetime is tied to whatever owns it.
pub trait ViewStateStore {
    fn load(&self, key: &str) -> Option<FrameState>;
    fn save(&mut self, key: &str, state: FrameState);
    fn remove(&mut self, key: &str) -> Option<FrameState>;
}

/// An in-memory [`ViewStateStore`].
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: StateMap,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl ViewStateStore for MemoryStore {
    fn load(&self, key: &str) -> Option<FrameState> {
        self.entries.get(key).copied()
    }

    fn save(&mut self, key: &str, state: FrameState) {
        self.entries.insert(String::from(key), state);
    }

    fn remove(&mut self, key: &str) -> Option<FrameState> {
        self.entries.remove(key)
    }
}
