//! The tag cloud controller.
//!
//! Owns the registry, the selection, and the last frame. Every layout pass
//! reads the registry as it stands (sizes are already refitted by the time
//! `add_tag` returns), asks the host measurer for each label's footprint at
//! its render size, and packs the footprints into rows.

use rustc_hash::FxHashSet;
use tagcloud_core::{AddOutcome, SelectionState, TagRegistry};
use tagcloud_graphics::{Point, Size};
use tagcloud_layout::{center_within, FlowLayout};

use crate::appearance::{TagAppearance, TagView};
use crate::config::TagCloudConfig;
use crate::event::{EventResponse, TagCloudEvent};
use crate::frame::{LayoutRequest, PlacedHint, PlacedTag, TagCloudFrame};
use crate::text::{MonospacedTextMeasurer, TextMeasurer};
use crate::transition::{AppearanceTransitions, NoTransitions, TransitionGate};

pub struct TagCloudController {
    config: TagCloudConfig,
    layout: FlowLayout,
    registry: TagRegistry,
    selection: SelectionState,
    measurer: Box<dyn TextMeasurer>,
    transitions: Box<dyn AppearanceTransitions>,
    /// Tags whose fade-in has started but not finished.
    appearing: FxHashSet<String>,
    gate: TransitionGate,
    area_hint: Option<String>,
    frame: Option<TagCloudFrame>,
    /// Set by every change that invalidates the last frame.
    stale: bool,
}

impl Default for TagCloudController {
    fn default() -> Self {
        Self::new(TagCloudConfig::default())
    }
}

impl TagCloudController {
    pub fn new(config: TagCloudConfig) -> Self {
        let registry = TagRegistry::new()
            .with_policy(config.duplicate_weights)
            .with_scaler(config.scaler);
        Self {
            layout: FlowLayout::new(config.padding),
            registry,
            selection: SelectionState::new(),
            measurer: Box::new(MonospacedTextMeasurer),
            transitions: Box::new(NoTransitions),
            appearing: FxHashSet::default(),
            gate: TransitionGate::default(),
            area_hint: None,
            frame: None,
            stale: true,
            config,
        }
    }

    pub fn with_measurer<M: TextMeasurer + 'static>(mut self, measurer: M) -> Self {
        self.measurer = Box::new(measurer);
        self.stale = true;
        self
    }

    pub fn with_transitions<T: AppearanceTransitions + 'static>(mut self, transitions: T) -> Self {
        self.transitions = Box::new(transitions);
        self
    }

    pub fn config(&self) -> &TagCloudConfig {
        &self.config
    }

    pub fn registry(&self) -> &TagRegistry {
        &self.registry
    }

    pub fn add_tag(&mut self, identifier: impl Into<String>, weight: f32) {
        let identifier = identifier.into();
        let outcome = self.registry.add(identifier.clone(), weight);
        match outcome {
            AddOutcome::Rejected => return,
            AddOutcome::Replaced(old) if !self.registry.contains(&old.identifier) => {
                self.appearing.remove(&old.identifier);
            }
            _ => {}
        }
        log::debug!("TagCloud: added {identifier:?} weight {weight}");
        self.stale = true;

        if self.config.animations_enabled
            && self
                .transitions
                .play_appearance(&identifier, &self.config.appear_transition)
        {
            self.appearing.insert(identifier);
        }
    }

    /// Removes every tag. Selection is kept; see [`Self::clear_selection`].
    pub fn clear(&mut self) {
        log::debug!("TagCloud: clearing {} tags", self.registry.len());
        self.registry.clear();
        self.appearing.clear();
        self.stale = true;
    }

    pub fn set_area_hint(&mut self, hint: Option<String>) {
        self.area_hint = hint;
        self.stale = true;
    }

    pub fn area_hint(&self) -> Option<&str> {
        self.area_hint.as_deref()
    }

    pub fn set_animations_enabled(&mut self, enabled: bool) {
        self.config.animations_enabled = enabled;
    }

    pub fn animations_enabled(&self) -> bool {
        self.config.animations_enabled
    }

    /// The hint shows only while exactly one tag is present.
    pub fn is_hint_visible(&self) -> bool {
        self.area_hint.is_some() && self.registry.len() == 1
    }

    pub fn is_layout_suspended(&self) -> bool {
        self.gate.is_suspended()
    }

    /// Runs a layout pass against `container`, or reuses the last frame when
    /// nothing changed since it was built.
    pub fn request_layout(&mut self, container: Size) -> LayoutRequest<'_> {
        if self.gate.is_suspended() {
            log::debug!("TagCloud: relayout in flight, deferring layout for {container:?}");
            self.gate.defer(container);
            return LayoutRequest::Deferred;
        }

        let reusable =
            !self.stale && self.frame.as_ref().map(|frame| frame.container) == Some(container);
        if !reusable {
            let next = self.build_frame(container);
            if self.config.animations_enabled {
                if let Some(previous) = &self.frame {
                    let moved = next.moved_from(previous);
                    if moved && self.transitions.play_relayout(previous, &next) {
                        log::debug!("TagCloud: relayout transition started");
                        self.gate.suspend();
                    }
                }
            }
            self.frame = Some(next);
            self.stale = false;
        }

        let padding = self.config.padding;
        LayoutRequest::Completed(
            self.frame
                .get_or_insert_with(|| TagCloudFrame::empty(container, padding)),
        )
    }

    pub fn last_frame(&self) -> Option<&TagCloudFrame> {
        self.frame.as_ref()
    }

    /// Placed tags of the last frame joined with the live selection.
    pub fn tag_views(&self) -> impl Iterator<Item = TagView<'_>> + '_ {
        self.frame
            .iter()
            .flat_map(|frame| frame.tags.iter())
            .map(move |tag| {
                let selected = self.selection.is_selected(&tag.identifier);
                TagView {
                    tag,
                    selected,
                    appearance: TagAppearance::for_selection(selected),
                }
            })
    }

    pub fn appearance(&self, identifier: &str) -> TagAppearance {
        TagAppearance::for_selection(self.selection.is_selected(identifier))
    }

    pub fn handle_event(&mut self, event: TagCloudEvent) -> EventResponse {
        match event {
            TagCloudEvent::TagClicked(identifier) => {
                if !self.registry.contains(&identifier) {
                    log::debug!("TagCloud: click on unknown tag {identifier:?}");
                    return EventResponse::Ignored;
                }
                let selected = self.toggle(&identifier);
                EventResponse::SelectionChanged {
                    identifier,
                    selected,
                }
            }
            TagCloudEvent::AppearanceFinished(identifier) => {
                if !self.appearing.remove(&identifier) {
                    return EventResponse::Ignored;
                }
                if let Some(tag) = self
                    .frame
                    .as_mut()
                    .and_then(|frame| frame.tags.iter_mut().find(|t| t.identifier == identifier))
                {
                    tag.visible = true;
                }
                EventResponse::Revealed(identifier)
            }
            TagCloudEvent::RelayoutFinished => {
                if !self.gate.is_suspended() {
                    return EventResponse::Ignored;
                }
                let relaid_out = match self.gate.resume() {
                    Some(container) => {
                        log::debug!("TagCloud: running deferred layout for {container:?}");
                        !self.request_layout(container).is_deferred()
                    }
                    None => false,
                };
                EventResponse::LayoutResumed { relaid_out }
            }
        }
    }

    /// Topmost visible tag under `point` in the last frame.
    pub fn tag_at(&self, point: Point) -> Option<&str> {
        self.frame
            .as_ref()?
            .tag_at(point)
            .map(|tag| tag.identifier.as_str())
    }

    /// Toggles the tag under `point`, returning its new selection state.
    pub fn click_at(&mut self, point: Point) -> Option<bool> {
        let identifier = self.tag_at(point)?.to_owned();
        Some(self.toggle(&identifier))
    }

    /// Flips selection of `identifier` and returns the new membership.
    pub fn toggle(&mut self, identifier: &str) -> bool {
        let selected = self.selection.toggle(identifier);
        log::debug!("TagCloud: {identifier:?} selected={selected}");
        selected
    }

    pub fn is_selected(&self, identifier: &str) -> bool {
        self.selection.is_selected(identifier)
    }

    /// Selected identifiers in the order they were selected.
    pub fn selected_tags(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.selection.selected()
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn build_frame(&self, container: Size) -> TagCloudFrame {
        let entries = self.registry.entries();
        let mut render_sizes = Vec::with_capacity(entries.len());
        let mut footprints = Vec::with_capacity(entries.len());
        for entry in entries {
            let render_size = entry.display_size() * self.config.render_scale;
            let metrics = self.measurer.measure(entry.identifier(), render_size);
            render_sizes.push(render_size);
            footprints.push(
                Size::new(metrics.width, metrics.height).inflate(self.config.label_insets),
            );
        }

        let packed = self.layout.layout(&footprints, container.width);
        let tags = entries
            .iter()
            .zip(render_sizes)
            .zip(&packed.boxes)
            .map(|((entry, render_size), bounds)| PlacedTag {
                identifier: entry.identifier().to_owned(),
                weight: entry.weight(),
                render_size,
                bounds: *bounds,
                visible: !self.appearing.contains(entry.identifier()),
            })
            .collect();

        TagCloudFrame {
            container,
            tags,
            rows: packed.rows,
            total_height: packed.total_height,
            hint: self.place_hint(container),
        }
    }

    fn place_hint(&self, container: Size) -> Option<PlacedHint> {
        if !self.is_hint_visible() {
            return None;
        }
        let text = self.area_hint.as_ref()?;
        let font_size = self.config.hint_font_size;
        let metrics = self.measurer.measure(text, font_size);
        Some(PlacedHint {
            text: text.clone(),
            font_size,
            bounds: center_within(container, Size::new(metrics.width, metrics.height)),
        })
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
