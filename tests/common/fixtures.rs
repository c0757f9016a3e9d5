//! Test fixtures - reusable gift documents.

/// Three lines: a chocolate, a lollipop and a plain sweet.
///
/// Totals: 7 sweets, 105 g, 20.00.
pub const SAMPLE_GIFT: &str = r#"{
  "items": [
    {
      "id": 1,
      "count": 2,
      "sweet": {
        "id": 10, "name": "Mishka", "manufacturer": "Krasny Oktyabr",
        "weight": 20.0, "sugar_weight": 12.0, "price": "4.00",
        "kind": "chocolate", "kind_of_chocolate": "dark"
      }
    },
    {
      "id": 2,
      "count": 3,
      "sweet": {
        "id": 11, "name": "Chupa", "manufacturer": "Perfetti",
        "weight": 15.0, "sugar_weight": 14.5, "price": "2.50",
        "kind": "lollipop", "flavor": "strawberry"
      }
    },
    {
      "id": 5,
      "count": 2,
      "sweet": {
        "id": 12, "name": "Iris", "manufacturer": "Kis-Kis",
        "weight": 10.0, "sugar_weight": 6.0, "price": "2.25",
        "kind": "plain"
      }
    }
  ]
}"#;

pub const EMPTY_GIFT: &str = r#"{ "items": [] }"#;

/// Two more Iris sweets (same sweet id as line 5 of `SAMPLE_GIFT`)
pub const MORE_IRIS: &str = r#"{
  "count": 2,
  "sweet": {
    "id": 12, "name": "Iris", "manufacturer": "Kis-Kis",
    "weight": 10.0, "sugar_weight": 6.0, "price": "2.25",
    "kind": "plain"
  }
}"#;

/// A sweet not yet in `SAMPLE_GIFT`
pub const NEW_TOFFEE: &str = r#"{
  "count": 1,
  "sweet": {
    "id": 13, "name": "Toffee", "manufacturer": "Rot Front",
    "weight": 12.0, "sugar_weight": 9.0, "price": "1.10",
    "kind": "plain"
  }
}"#;

/// Replacement for line 2 of `SAMPLE_GIFT`
pub const REPLACE_LINE_2: &str = r#"{
  "id": 2,
  "count": 1,
  "sweet": {
    "id": 11, "name": "Chupa", "manufacturer": "Perfetti",
    "weight": 15.0, "sugar_weight": 14.5, "price": "2.50",
    "kind": "lollipop", "flavor": "cola"
  }
}"#;

pub const DUPLICATE_IDS: &str = r#"{
  "items": [
    { "id": 1, "count": 1, "sweet": { "id": 1, "name": "A", "manufacturer": "M", "weight": 1.0, "sugar_weight": 0.5, "price": "1", "kind": "plain" } },
    { "id": 1, "count": 1, "sweet": { "id": 2, "name": "B", "manufacturer": "M", "weight": 1.0, "sugar_weight": 0.5, "price": "1", "kind": "plain" } }
  ]
}"#;
