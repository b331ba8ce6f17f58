use tabfold_data::{DatasetRecipe, ValueMap};

/// Names accepted by [`builtin`].
pub const BUILTIN_NAMES: &[&str] = &[
    "abalone",
    "car",
    "forest-fires",
    "machine",
    "segmentation",
    "wine-quality",
];

/// Look up a builtin recipe by name.
pub fn builtin(name: &str) -> Option<DatasetRecipe> {
    match name {
        "abalone" => Some(abalone()),
        "car" => Some(car()),
        "forest-fires" => Some(forest_fires()),
        "machine" => Some(machine()),
        "segmentation" => Some(segmentation()),
        "wine-quality" => Some(wine_quality()),
        _ => None,
    }
}

fn recipe(name: &str, class_column: usize, attribute_columns: Vec<usize>) -> DatasetRecipe {
    DatasetRecipe {
        name: name.to_string(),
        class_column,
        attribute_columns,
        header_length: 0,
        value_maps: Vec::new(),
        numeric_columns: Vec::new(),
        normalize_columns: Vec::new(),
        delimiter: ',',
    }
}

/// UCI Abalone: sex (categorical) plus seven measurements, ring count as class.
pub fn abalone() -> DatasetRecipe {
    DatasetRecipe {
        numeric_columns: (1..9).collect(),
        normalize_columns: (1..8).collect(),
        ..recipe("abalone", 8, (0..8).collect())
    }
}

/// UCI Car Evaluation: six ordinal attributes mapped to codes.
pub fn car() -> DatasetRecipe {
    let price = [("low", 0.0), ("med", 1.0), ("high", 2.0), ("vhigh", 3.0)];
    DatasetRecipe {
        value_maps: vec![
            ValueMap::new(0, &price),
            ValueMap::new(1, &price),
            ValueMap::new(2, &[("2", 2.0), ("3", 3.0), ("4", 4.0), ("5more", 5.0)]),
            ValueMap::new(3, &[("2", 2.0), ("4", 4.0), ("more", 5.0)]),
            ValueMap::new(4, &[("small", 0.0), ("med", 1.0), ("big", 2.0)]),
            ValueMap::new(5, &[("low", 0.0), ("med", 1.0), ("high", 2.0)]),
        ],
        normalize_columns: (0..6).collect(),
        ..recipe("car", 6, (0..6).collect())
    }
}

/// UCI Forest Fires: burned area regression. Month and day stay categorical.
pub fn forest_fires() -> DatasetRecipe {
    DatasetRecipe {
        header_length: 1,
        numeric_columns: [0, 1].into_iter().chain(4..13).collect(),
        normalize_columns: [0, 1].into_iter().chain(4..12).collect(),
        ..recipe("forest-fires", 12, (0..12).collect())
    }
}

/// UCI Computer Hardware: relative performance regression.
///
/// Vendor and model name are kept as categorical attributes; the trailing
/// estimated-performance column is left unused.
pub fn machine() -> DatasetRecipe {
    DatasetRecipe {
        numeric_columns: (2..9).collect(),
        normalize_columns: (2..8).collect(),
        ..recipe("machine", 8, (0..8).collect())
    }
}

/// UCI Image Segmentation: class label first, five header lines.
///
/// `vedge-sd` (column 7) and `hedge-sd` (column 9) are left out of the
/// attributes.
pub fn segmentation() -> DatasetRecipe {
    let attrs = vec![1, 2, 3, 4, 5, 6, 8, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19];
    DatasetRecipe {
        header_length: 5,
        numeric_columns: attrs.clone(),
        normalize_columns: attrs.clone(),
        ..recipe("segmentation", 0, attrs)
    }
}

/// UCI Wine Quality: eleven physicochemical attributes, quality as class.
pub fn wine_quality() -> DatasetRecipe {
    DatasetRecipe {
        numeric_columns: (0..12).collect(),
        normalize_columns: (0..11).collect(),
        ..recipe("wine-quality", 11, (0..11).collect())
    }
}
