//! Entity table parsing: stations, farmers and farms.

use std::path::Path;

use geo::Geometry;

use super::table::CsvTable;
use crate::error::{DataLoadError, Result};
use crate::geo::AreaMeasure;
use crate::models::{Farm, Farmer, Station};

/// Household-youth column names, preferred first
const YOUTH_COLUMNS: [&str; 2] = ["young_in_hh", "youth_in_hh"];

pub(crate) fn load_stations(path: &Path) -> Result<Vec<Station>> {
    let table = CsvTable::read(path)?;

    let id = table.column("cws_id")?;
    let name = table.column("cws_name")?;
    let ownership = table.column("cws_ownership")?;
    let capacity = table.column("actual_capacity")?;
    let geom = table.column("geom")?;

    let mut stations = Vec::with_capacity(table.len());
    for row in table.rows() {
        let location = match row.geometry(geom)? {
            Geometry::Point(point) => point.into(),
            Geometry::MultiPoint(points) if points.0.len() == 1 => points.0[0].into(),
            other => {
                return Err(row
                    .invalid_geometry(format!("expected POINT, found {}", geometry_kind(&other)))
                    .into())
            }
        };

        stations.push(Station {
            id: row.text(id).to_string(),
            name: row.text(name).to_string(),
            ownership: row.text(ownership).to_string(),
            capacity: row.float(capacity, "actual_capacity")?,
            location,
        });
    }

    tracing::info!(file = %table.file, rows = stations.len(), "Loaded washing stations");

    Ok(stations)
}

pub(crate) fn load_farmers(path: &Path) -> Result<Vec<Farmer>> {
    let table = CsvTable::read(path)?;

    let national_id = table.column("national_id")?;
    let gender = table.column("gender")?;
    let age = table.column("age")?;
    let district = table.column("district")?;
    let station_id = table.column("cws_id")?;
    let topics = table.column("training_topics")?;
    let (youth, youth_name) = match YOUTH_COLUMNS
        .iter()
        .find_map(|&name| table.optional_column(name).map(|column| (column, name)))
    {
        Some((column, name)) => (Some(column), name),
        None => {
            tracing::debug!(file = %table.file, "No household-youth column, counts treated as missing");
            (None, YOUTH_COLUMNS[0])
        }
    };

    let mut farmers = Vec::with_capacity(table.len());
    for row in table.rows() {
        farmers.push(Farmer {
            national_id: row.text(national_id).to_string(),
            gender: row.text(gender).to_string(),
            age: row.integer(age, "age")?,
            youth_in_household: row.optional_integer(youth, youth_name)?,
            district: row.text(district).to_lowercase(),
            station_id: row.text(station_id).to_string(),
            training_topics: row.text(topics).to_string(),
        });
    }

    tracing::info!(file = %table.file, rows = farmers.len(), "Loaded farmers");

    Ok(farmers)
}

pub(crate) fn load_farms(path: &Path, measure: &dyn AreaMeasure) -> Result<Vec<Farm>> {
    let table = CsvTable::read(path)?;

    let national_id = table.column("national_id")?;
    let station_id = table.column("cws_id")?;
    let bracket = table.column("age_range_coffee_trees")?;
    let trees = table.column("nbr_coffee_trees")?;
    let geom = table.column("geom")?;

    let mut farms = Vec::with_capacity(table.len());
    for row in table.rows() {
        let geometry = row.geometry(geom)?;
        if !matches!(geometry, Geometry::Polygon(_) | Geometry::MultiPolygon(_)) {
            return Err(row
                .invalid_geometry(format!(
                    "expected POLYGON or MULTIPOLYGON, found {}",
                    geometry_kind(&geometry)
                ))
                .into());
        }

        let footprint = measure
            .footprint(&geometry)?
            .ok_or_else(|| row.invalid_geometry("empty polygon".to_string()))?;

        let tree_count = row
            .optional_integer(Some(trees), "nbr_coffee_trees")?
            .map(|count| {
                u64::try_from(count).map_err(|_| DataLoadError::NotNumeric {
                    file: table.file.clone(),
                    row: row.number,
                    column: "nbr_coffee_trees".to_string(),
                    value: count.to_string(),
                })
            })
            .transpose()?;

        farms.push(Farm {
            national_id: row.text(national_id).to_string(),
            station_id: row.text(station_id).to_string(),
            location: footprint.centroid,
            area: footprint.area,
            tree_age_bracket: row.text(bracket).to_string(),
            tree_count,
        });
    }

    tracing::info!(
        file = %table.file,
        rows = farms.len(),
        measure = measure.name(),
        "Loaded farms"
    );

    Ok(farms)
}

fn geometry_kind(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "POINT",
        Geometry::Line(_) | Geometry::LineString(_) => "LINESTRING",
        Geometry::Polygon(_) => "POLYGON",
        Geometry::MultiPoint(_) => "MULTIPOINT",
        Geometry::MultiLineString(_) => "MULTILINESTRING",
        Geometry::MultiPolygon(_) => "MULTIPOLYGON",
        Geometry::GeometryCollection(_) => "GEOMETRYCOLLECTION",
        Geometry::Rect(_) => "RECT",
        Geometry::Triangle(_) => "TRIANGLE",
    }
}
