use std::collections::BTreeSet;

/// Default number of items buffered between the scanning thread and the
/// consumer in streaming mode.
pub const DEFAULT_QUEUE_CAPACITY: usize = 256;

/// Default initial size of the scratch buffer used to assemble tokens.
pub const DEFAULT_SCRATCH_CAPACITY: usize = 1024;

/// Configuration for an [`Extractor`](crate::Extractor).
///
/// Options are fixed when the extractor is constructed; nothing here can be
/// changed while a scan is running.
///
/// # Examples
///
/// ```rust
/// use jsonpluck::ExtractorOptions;
///
/// let options = ExtractorOptions::new("items").skip(["payload", "raw"]);
/// assert_eq!(options.loop_property, "items");
/// assert!(options.skip_properties.contains("raw"));
/// ```
///
/// # Default
///
/// The default options select root-list mode (empty loop property), skip
/// nothing, and use [`DEFAULT_QUEUE_CAPACITY`] and
/// [`DEFAULT_SCRATCH_CAPACITY`].
#[derive(Debug, Clone)]
pub struct ExtractorOptions {
    /// Name of the property whose values are emitted.
    ///
    /// Every occurrence, at any depth, is matched. When the matched value is
    /// an array, each element is emitted as its own item.
    ///
    /// When empty, no property is matched; instead the root value of the
    /// document is emitted (a root array emits each of its elements).
    ///
    /// # Default
    ///
    /// `""`
    pub loop_property: String,

    /// Properties whose values are scanned but never materialized inside
    /// emitted objects. A skipped property is absent from the resulting map.
    ///
    /// # Default
    ///
    /// Empty
    pub skip_properties: BTreeSet<String>,

    /// Capacity of the bounded queue used by
    /// [`Extractor::stream`](crate::Extractor::stream). The scanning thread
    /// blocks once this many items are waiting to be consumed.
    ///
    /// # Default
    ///
    /// [`DEFAULT_QUEUE_CAPACITY`]
    pub queue_capacity: usize,

    /// Initial capacity in bytes of the token scratch buffer. The buffer
    /// doubles whenever a token outgrows it and is reused for the whole scan.
    ///
    /// # Default
    ///
    /// [`DEFAULT_SCRATCH_CAPACITY`]
    pub scratch_capacity: usize,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            loop_property: String::new(),
            skip_properties: BTreeSet::new(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            scratch_capacity: DEFAULT_SCRATCH_CAPACITY,
        }
    }
}

impl ExtractorOptions {
    /// Options matching `loop_property`, everything else defaulted.
    #[must_use]
    pub fn new(loop_property: impl Into<String>) -> Self {
        Self {
            loop_property: loop_property.into(),
            ..Default::default()
        }
    }

    /// Adds `names` to the skip set.
    #[must_use]
    pub fn skip<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_properties.extend(names.into_iter().map(Into::into));
        self
    }

    /// Returns `true` when the root value itself is emitted instead of a
    /// named property.
    #[must_use]
    pub fn is_root_list(&self) -> bool {
        self.loop_property.is_empty()
    }
}
