//! Built-in country presets: dataset selector plus the matching region
//! directory, as plain data the pipeline is parameterized with.
//!
//! Nothing here is special-cased in the pipeline itself; a caller with its
//! own GeoJSON source and directory file gets identical behaviour through
//! the same entry points.

use crate::error::PipelineError;
use crate::registry::{LabelRegistry, RegionDirectory, parse_hex_color};
use crate::source::DatasetSpec;
use plotters::style::RGBColor;

/// Light grey, visually distinct from every palette colour.
pub const UNASSIGNED_COLOR: RGBColor = RGBColor(211, 211, 211);

/// The four-colour palette used by the solver's examples:
/// R/G/B/Y plus the reserved grey for unassigned regions.
pub fn default_palette() -> Result<LabelRegistry, PipelineError> {
    let entries = [
        ("R", parse_hex_color("#FF6B6B")?),
        ("G", parse_hex_color("#4ECDC4")?),
        ("B", parse_hex_color("#45B7D1")?),
        ("Y", parse_hex_color("#FFD93D")?),
    ];
    LabelRegistry::new(entries, UNASSIGNED_COLOR)
}

/// Australian states (7 regions, `STATE_NAME` property).
pub fn australia() -> (DatasetSpec, RegionDirectory) {
    let dataset = DatasetSpec {
        id: "au".to_string(),
        url: "https://raw.githubusercontent.com/rowanhogan/australian-states/master/states.geojson"
            .to_string(),
        name_property: "STATE_NAME".to_string(),
    };
    let directory = RegionDirectory::new([
        ("NSW", "New South Wales"),
        ("NT", "Northern Territory"),
        ("QLD", "Queensland"),
        ("SA", "South Australia"),
        ("TAS", "Tasmania"),
        ("VIC", "Victoria"),
        ("WA", "Western Australia"),
    ])
    .expect("australia directory is injective");
    (dataset, directory)
}

/// Metropolitan France, 22 pre-2015 regions (`nom` property).
pub fn france() -> (DatasetSpec, RegionDirectory) {
    let dataset = DatasetSpec {
        id: "france".to_string(),
        url: "https://raw.githubusercontent.com/gregoiredavid/france-geojson/master/regions-avant-redecoupage-2015.geojson"
            .to_string(),
        name_property: "nom".to_string(),
    };
    let directory = RegionDirectory::new([
        ("AL", "Alsace"),
        ("AQ", "Aquitaine"),
        ("AU", "Auvergne"),
        ("BO", "Bourgogne"),
        ("BR", "Bretagne"),
        ("CA", "Champagne-Ardenne"),
        ("CE", "Centre"),
        ("CO", "Corse"),
        ("FC", "Franche-Comté"),
        ("IF", "Île-de-France"),
        ("LI", "Limousin"),
        ("LO", "Lorraine"),
        ("LR", "Languedoc-Roussillon"),
        ("MP", "Midi-Pyrénées"),
        ("NB", "Basse-Normandie"),
        ("NH", "Nord-Pas-de-Calais"),
        ("NO", "Haute-Normandie"),
        ("PA", "Pays de la Loire"),
        ("PC", "Poitou-Charentes"),
        ("PI", "Picardie"),
        ("PL", "Provence-Alpes-Côte d'Azur"),
        ("RA", "Rhône-Alpes"),
    ])
    .expect("france directory is injective");
    (dataset, directory)
}

/// US states plus the District of Columbia (51 regions, `name` property).
pub fn usa() -> (DatasetSpec, RegionDirectory) {
    let dataset = DatasetSpec {
        id: "usa".to_string(),
        url: "https://raw.githubusercontent.com/PublicaMundi/MappingAPI/master/data/geojson/us-states.json"
            .to_string(),
        name_property: "name".to_string(),
    };
    let directory = RegionDirectory::new([
        ("AL", "Alabama"),
        ("AK", "Alaska"),
        ("AZ", "Arizona"),
        ("AR", "Arkansas"),
        ("CA", "California"),
        ("CO", "Colorado"),
        ("CT", "Connecticut"),
        ("DE", "Delaware"),
        ("DC", "District of Columbia"),
        ("FL", "Florida"),
        ("GA", "Georgia"),
        ("HI", "Hawaii"),
        ("ID", "Idaho"),
        ("IL", "Illinois"),
        ("IN", "Indiana"),
        ("IA", "Iowa"),
        ("KS", "Kansas"),
        ("KY", "Kentucky"),
        ("LA", "Louisiana"),
        ("ME", "Maine"),
        ("MD", "Maryland"),
        ("MA", "Massachusetts"),
        ("MI", "Michigan"),
        ("MN", "Minnesota"),
        ("MS", "Mississippi"),
        ("MO", "Missouri"),
        ("MT", "Montana"),
        ("NE", "Nebraska"),
        ("NV", "Nevada"),
        ("NH", "New Hampshire"),
        ("NJ", "New Jersey"),
        ("NM", "New Mexico"),
        ("NY", "New York"),
        ("NC", "North Carolina"),
        ("ND", "North Dakota"),
        ("OH", "Ohio"),
        ("OK", "Oklahoma"),
        ("OR", "Oregon"),
        ("PA", "Pennsylvania"),
        ("RI", "Rhode Island"),
        ("SC", "South Carolina"),
        ("SD", "South Dakota"),
        ("TN", "Tennessee"),
        ("TX", "Texas"),
        ("UT", "Utah"),
        ("VT", "Vermont"),
        ("VA", "Virginia"),
        ("WA", "Washington"),
        ("WV", "West Virginia"),
        ("WI", "Wisconsin"),
        ("WY", "Wyoming"),
    ])
    .expect("usa directory is injective");
    (dataset, directory)
}
