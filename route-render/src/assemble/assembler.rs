//! Route assembly: the single pass that drives every other component.

use serde_json::Value;
use tracing::{debug, trace};

use crate::gazetteer::Gazetteer;
use crate::geo::BoundsAccumulator;
use crate::model::{
    AssembleError, Diagnostic, DiagnosticKind, RenderableSegment, ResolvedStop, RouteRenderModel,
    SegmentMeta,
};
use crate::names::StopNameCache;
use crate::raw::{RawId, RawRouteDescriptor, RawSegmentDescriptor, RawStopDescriptor};

use super::config::AssembleConfig;
use super::coords::numeric;
use super::endpoints::{BoundaryContext, resolve_boundary, resolve_place};
use super::geometry::extract_polyline;
use super::mode::classify;
use super::transfers::{Boundary, is_transfer, stop_identity};

/// The model plus the degradation record of one invocation.
#[derive(Debug)]
pub struct AssembledRoute {
    pub model: RouteRenderModel,
    pub diagnostics: Vec<Diagnostic>,
}

/// The pipeline entry point.
///
/// Holds the read-only gazetteer and the configuration; all per-invocation
/// state (diagnostics, bounds) is allocated fresh inside [`assemble`], so
/// one assembler can serve any number of concurrent callers.
///
/// [`assemble`]: RouteAssembler::assemble
#[derive(Debug, Clone)]
pub struct RouteAssembler {
    gazetteer: Gazetteer,
    config: AssembleConfig,
}

impl RouteAssembler {
    pub fn new(gazetteer: Gazetteer, config: AssembleConfig) -> Self {
        Self { gazetteer, config }
    }

    /// Assembler over the built-in gazetteer with default configuration.
    pub fn builtin() -> Self {
        Self::new(Gazetteer::builtin(), AssembleConfig::default())
    }

    /// Normalize one raw route description into a renderable model.
    ///
    /// Data-quality problems degrade into diagnostics: a segment missing a
    /// resolvable boundary is skipped, a malformed geometry is dropped from
    /// an otherwise kept segment, and an input where nothing resolves
    /// yields an empty model with the fallback bounds.
    ///
    /// # Errors
    ///
    /// Returns [`AssembleError::MissingSegments`] when the descriptor has
    /// no segment list at all; that is a broken call contract, not bad
    /// data.
    pub fn assemble(
        &self,
        raw: &RawRouteDescriptor,
        names: &mut StopNameCache,
    ) -> Result<AssembledRoute, AssembleError> {
        let segments = raw
            .segments
            .as_deref()
            .ok_or(AssembleError::MissingSegments)?;
        debug!(segment_count = segments.len(), "assembling route");

        let route_origin = resolve_place(raw.from_city.as_ref(), &self.gazetteer, &self.config);
        let route_destination = resolve_place(raw.to_city.as_ref(), &self.gazetteer, &self.config);

        // Record every id/name pairing up front so id-only references get
        // a display name no matter where in the list the name appears.
        for segment in segments {
            for stop in boundary_stops(segment) {
                if let Some(id) = stop.id.as_ref().and_then(RawId::as_text) {
                    if let Some(name) = stop.name.as_deref() {
                        names.record(&id, name);
                    }
                }
            }
        }

        let mut rendered = Vec::with_capacity(segments.len());
        let mut diagnostics = Vec::new();
        let mut bounds = BoundsAccumulator::new();
        let mut previous_to = None;

        for (index, segment) in segments.iter().enumerate() {
            let segment_id = segment
                .id
                .as_ref()
                .and_then(RawId::as_text)
                .unwrap_or_else(|| format!("seg-{index}"));

            let ctx = BoundaryContext {
                route_origin,
                route_destination,
                is_first: index == 0,
                is_last: index + 1 == segments.len(),
                previous_to: previous_to.take(),
                next_from: segments.get(index + 1).and_then(|s| s.from.as_ref()),
            };

            let from_point = resolve_boundary(
                segment.from.as_ref(),
                Boundary::From,
                &ctx,
                &self.gazetteer,
                &self.config,
            );
            let to_point = resolve_boundary(
                segment.to.as_ref(),
                Boundary::To,
                &ctx,
                &self.gazetteer,
                &self.config,
            );

            let (from_point, to_point) = match (from_point, to_point) {
                (Some(from), Some(to)) => (from, to),
                (from, to) => {
                    let detail = match (from.is_some(), to.is_some()) {
                        (false, true) => "no coordinate found for \"from\" stop",
                        (true, false) => "no coordinate found for \"to\" stop",
                        _ => "no coordinate found for either boundary stop",
                    };
                    debug!(index, segment_id = %segment_id, detail, "skipping segment");
                    diagnostics.push(Diagnostic {
                        segment_index: index,
                        segment_id,
                        kind: DiagnosticKind::EndpointUnresolved,
                        detail: detail.to_string(),
                    });
                    continue;
                }
            };

            let from_stop = build_stop(
                segment.from.as_ref(),
                from_point,
                is_transfer(segments, index, Boundary::From),
                names,
            );
            let to_stop = build_stop(
                segment.to.as_ref(),
                to_point,
                is_transfer(segments, index, Boundary::To),
                names,
            );

            let polyline =
                extract_polyline(segment.geometry.as_ref(), from_point, to_point, &self.config);
            if segment.geometry.is_some() && polyline.is_none() {
                trace!(index, segment_id = %segment_id, "discarding geometry");
                diagnostics.push(Diagnostic {
                    segment_index: index,
                    segment_id: segment_id.clone(),
                    kind: DiagnosticKind::GeometryDiscarded,
                    detail: "geometry payload yielded fewer than two valid points".to_string(),
                });
            }

            bounds.add(from_point);
            bounds.add(to_point);
            if let Some(line) = &polyline {
                for &point in line {
                    bounds.add(point);
                }
            }

            // The raw identity, not the built stop's: an anonymous "to"
            // gets a placeholder display name, and that must not read as
            // an identity conflict on the next segment's "from".
            previous_to = Some((stop_identity(segment.to.as_ref()), to_point));

            rendered.push(RenderableSegment {
                id: segment_id,
                mode: classify(segment),
                from: from_stop,
                to: to_stop,
                polyline,
                meta: segment_meta(segment),
                via_hubs: hub_names(segment),
                annotations: segment.risk.clone(),
            });
        }

        debug!(
            emitted = rendered.len(),
            diagnostics = diagnostics.len(),
            "route assembled"
        );

        let model = RouteRenderModel {
            id: route_id(raw),
            segments: rendered,
            bounds: bounds.finish(),
        };
        Ok(AssembledRoute { model, diagnostics })
    }
}

fn boundary_stops(segment: &RawSegmentDescriptor) -> impl Iterator<Item = &RawStopDescriptor> {
    [segment.from.as_ref(), segment.to.as_ref()]
        .into_iter()
        .flatten()
}

fn build_stop(
    raw: Option<&RawStopDescriptor>,
    point: crate::geo::GeoPoint,
    is_transfer: bool,
    names: &StopNameCache,
) -> ResolvedStop {
    let id = raw.and_then(|s| s.id.as_ref()).and_then(RawId::as_text);
    let name = raw
        .and_then(|s| s.name.clone())
        .or_else(|| {
            id.as_deref()
                .and_then(|i| names.get(i))
                .map(str::to_string)
        })
        .or_else(|| id.clone())
        .unwrap_or_else(|| "unnamed stop".to_string());

    ResolvedStop {
        id,
        name,
        kind: raw.and_then(|s| s.stop_type.clone()),
        is_hub: raw.and_then(|s| s.is_hub).unwrap_or(false),
        point,
        is_transfer,
    }
}

fn segment_meta(segment: &RawSegmentDescriptor) -> SegmentMeta {
    SegmentMeta {
        distance_km: segment.distance_km.as_ref().and_then(numeric),
        duration_minutes: segment.duration_minutes.as_ref().and_then(numeric),
        price: segment.price.clone(),
        departure: segment.departure.as_ref().and_then(display_text),
        arrival: segment.arrival.as_ref().and_then(display_text),
        frequency: segment.frequency.as_ref().and_then(display_text),
    }
}

/// Display string for a pass-through scalar; structured values (objects,
/// arrays) are not flattened into popup text.
fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn hub_names(segment: &RawSegmentDescriptor) -> Vec<String> {
    segment
        .via_hubs
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .filter_map(|hub| hub.display_name())
        .collect()
}

fn route_id(raw: &RawRouteDescriptor) -> String {
    if let Some(id) = raw.id.as_ref().and_then(RawId::as_text) {
        return id;
    }
    let from = raw.from_city.as_ref().and_then(|p| p.display_name());
    let to = raw.to_city.as_ref().and_then(|p| p.display_name());
    match (from, to) {
        (Some(from), Some(to)) => format!("{from} - {to}"),
        (Some(one), None) | (None, Some(one)) => one.to_string(),
        (None, None) => "route".to_string(),
    }
}
