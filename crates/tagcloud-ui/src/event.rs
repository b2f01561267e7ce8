//! Events flowing from the host into the controller.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagCloudEvent {
    /// The label of this tag was clicked.
    TagClicked(String),
    /// The fade-in of a newly added tag completed.
    AppearanceFinished(String),
    /// The relayout transition offered by the controller completed.
    RelayoutFinished,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventResponse {
    SelectionChanged { identifier: String, selected: bool },
    /// The tag is now painted.
    Revealed(String),
    /// The layout gate reopened; `relaid_out` is true when a deferred pass ran.
    LayoutResumed { relaid_out: bool },
    Ignored,
}
