//! Geometry source: fetch and parse GeoJSON region datasets.
//!
//! A dataset is a FeatureCollection with one feature per administrative
//! region. The property holding the canonical region name varies per dataset
//! (`"STATE_NAME"`, `"nom"`, `"name"`, …), so it is part of [`DatasetSpec`]
//! rather than hardcoded.
//!
//! Failures here (network, HTTP status, malformed GeoJSON) surface to the
//! caller unchanged; retries are deliberately *not* performed — if the host
//! environment wants them, it wraps the fetch call.

use crate::models::RegionRecord;
use anyhow::{Context, Result, bail};
use geo::MultiPolygon;
use geojson::GeoJson;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::path::Path;
use std::time::Duration;

/// Selector for one country's geometry dataset.
#[derive(Debug, Clone)]
pub struct DatasetSpec {
    /// Short identifier used in logs and CLI output (e.g., `"au"`).
    pub id: String,
    /// Where the GeoJSON FeatureCollection lives.
    pub url: String,
    /// Feature property holding the canonical region name.
    pub name_property: String,
}

/// Synchronous client for fetching GeoJSON datasets over HTTP.
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("chromap/", env!("CARGO_PKG_VERSION"))) // set user agent
            .build()
            .expect("reqwest client build");
        Self { http }
    }
}

impl Client {
    /// Fetch a dataset and parse it into region records.
    ///
    /// One network round trip, no retry. Any failure (connection, non-2xx
    /// status, parse) is returned as-is.
    pub fn fetch_regions(&self, dataset: &DatasetSpec) -> Result<Vec<RegionRecord>> {
        let resp = self
            .http
            .get(&dataset.url)
            .send()
            .with_context(|| format!("GET {}", dataset.url))?;
        if !resp.status().is_success() {
            bail!("request failed with HTTP {}", resp.status());
        }
        let body = resp.text().context("read response body")?;
        let geojson: GeoJson = body
            .parse()
            .with_context(|| format!("parse geojson from {}", dataset.url))?;
        regions_from_geojson(geojson, &dataset.name_property)
            .with_context(|| format!("dataset {}", dataset.id))
    }
}

/// Parse a local GeoJSON file into region records.
pub fn load_regions<P: AsRef<Path>>(path: P, name_property: &str) -> Result<Vec<RegionRecord>> {
    let path = path.as_ref();
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;
    let geojson: GeoJson = body
        .parse()
        .with_context(|| format!("parse geojson from {}", path.display()))?;
    regions_from_geojson(geojson, name_property)
}

/// Extract one [`RegionRecord`] per feature, preserving feature order.
///
/// - `Polygon` geometry lifts to a single-part `MultiPolygon`.
/// - Non-areal or missing geometry yields an *empty* boundary; the region is
///   kept (downstream stages decide how to degrade) rather than dropped.
/// - A feature without the name property is a format error: records without
///   a join key cannot participate in reconciliation at all.
pub fn regions_from_geojson(geojson: GeoJson, name_property: &str) -> Result<Vec<RegionRecord>> {
    let collection = match geojson {
        GeoJson::FeatureCollection(fc) => fc,
        other => bail!(
            "expected a FeatureCollection, got {}",
            match other {
                GeoJson::Geometry(_) => "a bare Geometry",
                GeoJson::Feature(_) => "a single Feature",
                GeoJson::FeatureCollection(_) => unreachable!(),
            }
        ),
    };

    let mut out = Vec::with_capacity(collection.features.len());
    for (idx, feature) in collection.features.into_iter().enumerate() {
        let name = feature
            .property(name_property)
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .with_context(|| {
                format!("feature #{idx} has no string property {name_property:?}")
            })?;
        let boundary = match feature.geometry {
            Some(geometry) => boundary_of(geometry.value),
            None => MultiPolygon::new(vec![]),
        };
        out.push(RegionRecord { name, boundary });
    }
    Ok(out)
}

/// Convert a GeoJSON geometry to an areal boundary, empty when not areal.
fn boundary_of(value: geojson::Value) -> MultiPolygon<f64> {
    match geo::Geometry::<f64>::try_from(value) {
        Ok(geo::Geometry::Polygon(p)) => MultiPolygon::new(vec![p]),
        Ok(geo::Geometry::MultiPolygon(mp)) => mp,
        _ => MultiPolygon::new(vec![]),
    }
}
