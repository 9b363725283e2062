// Static hostel catalog: reference data loaded once at startup, never mutated.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum HostelGender {
    #[serde(rename = "male")]
    Male,
    #[serde(rename = "female")]
    Female,
    #[serde(rename = "mixed")]
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum RoomKind {
    #[serde(rename = "1-person")]
    OnePerson,
    #[serde(rename = "2-person")]
    TwoPerson,
    #[serde(rename = "4-person")]
    FourPerson,
}

impl RoomKind {
    // Wire name as stored in request records ("1-person", "2-person", "4-person")
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomKind::OnePerson => "1-person",
            RoomKind::TwoPerson => "2-person",
            RoomKind::FourPerson => "4-person",
        }
    }

    // Display label used by the room listing
    pub fn label(&self) -> &'static str {
        match self {
            RoomKind::OnePerson => "Single Room",
            RoomKind::TwoPerson => "Double Room",
            RoomKind::FourPerson => "Quad Room",
        }
    }
}

impl std::fmt::Display for RoomKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Hostel {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub gender: HostelGender,
    pub location: String,
    pub description: String,
    pub price: u32,
    pub capacity: u32,
    pub available: u32,
    pub features: Vec<String>,
    pub image: String,
    pub rooms: Vec<Room>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Room {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RoomKind,
    pub floor: String,
    pub price: u32,
    pub available: bool,
    pub amenities: Vec<String>,
    pub description: String,
    pub dimensions: String,
    pub orientation: String,
}

impl Hostel {
    pub fn room(&self, room_id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == room_id)
    }

    // Distinct floor names in first-seen order, for the floor filter dropdown
    pub fn unique_floors(&self) -> Vec<&str> {
        let mut floors: Vec<&str> = Vec::new();
        for room in &self.rooms {
            if !floors.contains(&room.floor.as_str()) {
                floors.push(&room.floor);
            }
        }
        floors
    }

    // (min, max) room price shown on the hostel card
    pub fn price_range(&self) -> Option<(u32, u32)> {
        let min = self.rooms.iter().map(|r| r.price).min()?;
        let max = self.rooms.iter().map(|r| r.price).max()?;
        Some((min, max))
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    hostels: Vec<Hostel>,
}

impl Catalog {
    // Parse the embedded seed data. Called once at process start; the catalog
    // is read-only afterwards.
    pub fn load() -> Result<Self, CatalogError> {
        let hostels: Vec<Hostel> = serde_json::from_str(SEED_JSON)?;
        Ok(Self { hostels })
    }

    pub fn hostels(&self) -> &[Hostel] {
        &self.hostels
    }

    pub fn hostel(&self, id: &str) -> Option<&Hostel> {
        self.hostels.iter().find(|h| h.id == id)
    }
}

// Seed catalog carried over from the university housing data set.
pub const SEED_JSON: &str = r#"[
  {
    "id": "1",
    "name": "Al-Hikmah Male Hostel A",
    "type": "male",
    "location": "Main Campus",
    "description": "Standard male hostel with basic amenities for undergraduate students.",
    "price": 80000,
    "capacity": 200,
    "available": 45,
    "features": ["Bunk beds", "Study tables", "Common room", "Security"],
    "image": "/placeholder.svg?height=300&width=500",
    "rooms": [
      {
        "id": "A101",
        "type": "2-person",
        "floor": "Ground Floor",
        "price": 80000,
        "available": true,
        "amenities": ["Bunk bed", "Study table", "Wardrobe", "Fan"],
        "description": "Standard 2-person room with basic amenities",
        "dimensions": "4m x 5m (20 sq.m)",
        "orientation": "South-facing"
      },
      {
        "id": "A102",
        "type": "2-person",
        "floor": "Ground Floor",
        "price": 80000,
        "available": true,
        "amenities": ["Bunk bed", "Study table", "Wardrobe", "Fan"],
        "description": "Standard 2-person room with basic amenities",
        "dimensions": "4m x 5m (20 sq.m)",
        "orientation": "North-facing"
      },
      {
        "id": "A201",
        "type": "4-person",
        "floor": "First Floor",
        "price": 70000,
        "available": true,
        "amenities": ["Bunk beds", "Study tables", "Wardrobes", "Fan"],
        "description": "Spacious 4-person room with shared facilities",
        "dimensions": "6m x 6m (36 sq.m)",
        "orientation": "East-facing"
      },
      {
        "id": "A202",
        "type": "4-person",
        "floor": "First Floor",
        "price": 70000,
        "available": false,
        "amenities": ["Bunk beds", "Study tables", "Wardrobes", "Fan"],
        "description": "Spacious 4-person room with shared facilities",
        "dimensions": "6m x 6m (36 sq.m)",
        "orientation": "West-facing"
      }
    ]
  },
  {
    "id": "2",
    "name": "Al-Hikmah Male Hostel B",
    "type": "male",
    "location": "Main Campus",
    "description": "Premium male hostel with enhanced facilities for undergraduate students.",
    "price": 100000,
    "capacity": 150,
    "available": 20,
    "features": ["Bunk beds", "Study tables", "Common room", "WiFi", "TV room", "Security"],
    "image": "/placeholder.svg?height=300&width=500",
    "rooms": [
      {
        "id": "B101",
        "type": "2-person",
        "floor": "Ground Floor",
        "price": 100000,
        "available": true,
        "amenities": ["Bunk bed", "Study table", "Wardrobe", "Fan", "WiFi"],
        "description": "Premium 2-person room with enhanced amenities",
        "dimensions": "4.5m x 5.5m (24.75 sq.m)",
        "orientation": "South-facing"
      },
      {
        "id": "B102",
        "type": "2-person",
        "floor": "Ground Floor",
        "price": 100000,
        "available": false,
        "amenities": ["Bunk bed", "Study table", "Wardrobe", "Fan", "WiFi"],
        "description": "Premium 2-person room with enhanced amenities",
        "dimensions": "4.5m x 5.5m (24.75 sq.m)",
        "orientation": "North-facing"
      },
      {
        "id": "B201",
        "type": "4-person",
        "floor": "First Floor",
        "price": 90000,
        "available": true,
        "amenities": ["Bunk beds", "Study tables", "Wardrobes", "Fan", "WiFi"],
        "description": "Premium 4-person room with enhanced amenities",
        "dimensions": "7m x 6m (42 sq.m)",
        "orientation": "East-facing"
      }
    ]
  },
  {
    "id": "3",
    "name": "Al-Hikmah Female Hostel A",
    "type": "female",
    "location": "Main Campus",
    "description": "Standard female hostel with basic amenities for undergraduate students.",
    "price": 80000,
    "capacity": 200,
    "available": 30,
    "features": ["Bunk beds", "Study tables", "Common room", "Security"],
    "image": "/placeholder.svg?height=300&width=500",
    "rooms": [
      {
        "id": "FA101",
        "type": "2-person",
        "floor": "Ground Floor",
        "price": 80000,
        "available": true,
        "amenities": ["Bunk bed", "Study table", "Wardrobe", "Fan"],
        "description": "Standard 2-person room with basic amenities",
        "dimensions": "4m x 5m (20 sq.m)",
        "orientation": "South-facing"
      },
      {
        "id": "FA102",
        "type": "2-person",
        "floor": "Ground Floor",
        "price": 80000,
        "available": true,
        "amenities": ["Bunk bed", "Study table", "Wardrobe", "Fan"],
        "description": "Standard 2-person room with basic amenities",
        "dimensions": "4m x 5m (20 sq.m)",
        "orientation": "North-facing"
      },
      {
        "id": "FA201",
        "type": "4-person",
        "floor": "First Floor",
        "price": 70000,
        "available": true,
        "amenities": ["Bunk beds", "Study tables", "Wardrobes", "Fan"],
        "description": "Spacious 4-person room with shared facilities",
        "dimensions": "6m x 6m (36 sq.m)",
        "orientation": "East-facing"
      }
    ]
  },
  {
    "id": "4",
    "name": "Al-Hikmah Female Hostel B",
    "type": "female",
    "location": "Main Campus",
    "description": "Premium female hostel with enhanced facilities for undergraduate students.",
    "price": 100000,
    "capacity": 150,
    "available": 15,
    "features": ["Bunk beds", "Study tables", "Common room", "WiFi", "TV room", "Security"],
    "image": "/placeholder.svg?height=300&width=500",
    "rooms": [
      {
        "id": "FB101",
        "type": "2-person",
        "floor": "Ground Floor",
        "price": 100000,
        "available": true,
        "amenities": ["Bunk bed", "Study table", "Wardrobe", "Fan", "WiFi"],
        "description": "Premium 2-person room with enhanced amenities",
        "dimensions": "4.5m x 5.5m (24.75 sq.m)",
        "orientation": "South-facing"
      },
      {
        "id": "FB102",
        "type": "2-person",
        "floor": "Ground Floor",
        "price": 100000,
        "available": false,
        "amenities": ["Bunk bed", "Study table", "Wardrobe", "Fan", "WiFi"],
        "description": "Premium 2-person room with enhanced amenities",
        "dimensions": "4.5m x 5.5m (24.75 sq.m)",
        "orientation": "North-facing"
      },
      {
        "id": "FB201",
        "type": "4-person",
        "floor": "First Floor",
        "price": 90000,
        "available": true,
        "amenities": ["Bunk beds", "Study tables", "Wardrobes", "Fan", "WiFi"],
        "description": "Premium 4-person room with enhanced amenities",
        "dimensions": "7m x 6m (42 sq.m)",
        "orientation": "East-facing"
      }
    ]
  },
  {
    "id": "5",
    "name": "Al-Hikmah Postgraduate Hostel",
    "type": "male",
    "location": "Postgraduate Campus",
    "description": "Exclusive hostel for postgraduate students with premium facilities.",
    "price": 120000,
    "capacity": 100,
    "available": 25,
    "features": ["Single beds", "Study tables", "Private bathrooms", "WiFi", "Kitchen", "Security"],
    "image": "/placeholder.svg?height=300&width=500",
    "rooms": [
      {
        "id": "PG101",
        "type": "1-person",
        "floor": "Ground Floor",
        "price": 120000,
        "available": true,
        "amenities": ["Single bed", "Study table", "Wardrobe", "Private bathroom", "WiFi", "AC"],
        "description": "Exclusive single room with private bathroom for postgraduate students",
        "dimensions": "3.5m x 4m (14 sq.m)",
        "orientation": "South-facing"
      },
      {
        "id": "PG102",
        "type": "1-person",
        "floor": "Ground Floor",
        "price": 120000,
        "available": true,
        "amenities": ["Single bed", "Study table", "Wardrobe", "Private bathroom", "WiFi", "AC"],
        "description": "Exclusive single room with private bathroom for postgraduate students",
        "dimensions": "3.5m x 4m (14 sq.m)",
        "orientation": "North-facing"
      },
      {
        "id": "PG201",
        "type": "2-person",
        "floor": "First Floor",
        "price": 100000,
        "available": true,
        "amenities": ["Single beds", "Study tables", "Wardrobes", "Shared bathroom", "WiFi", "AC"],
        "description": "Premium 2-person room with enhanced amenities for postgraduate students",
        "dimensions": "5m x 5m (25 sq.m)",
        "orientation": "East-facing"
      }
    ]
  },
  {
    "id": "6",
    "name": "Al-Hikmah International Students Hostel",
    "type": "female",
    "location": "Main Campus",
    "description": "Dedicated hostel for international students with premium amenities.",
    "price": 150000,
    "capacity": 50,
    "available": 10,
    "features": ["Single beds", "Study tables", "Private bathrooms", "WiFi", "Kitchen", "AC", "Security"],
    "image": "/placeholder.svg?height=300&width=500",
    "rooms": [
      {
        "id": "INT101",
        "type": "1-person",
        "floor": "Ground Floor",
        "price": 150000,
        "available": true,
        "amenities": ["Single bed", "Study table", "Wardrobe", "Private bathroom", "WiFi", "AC", "TV"],
        "description": "Luxury single room with private bathroom for international students",
        "dimensions": "4m x 4.5m (18 sq.m)",
        "orientation": "South-facing"
      },
      {
        "id": "INT102",
        "type": "1-person",
        "floor": "Ground Floor",
        "price": 150000,
        "available": false,
        "amenities": ["Single bed", "Study table", "Wardrobe", "Private bathroom", "WiFi", "AC", "TV"],
        "description": "Luxury single room with private bathroom for international students",
        "dimensions": "4m x 4.5m (18 sq.m)",
        "orientation": "North-facing"
      },
      {
        "id": "INT201",
        "type": "2-person",
        "floor": "First Floor",
        "price": 130000,
        "available": true,
        "amenities": ["Single beds", "Study tables", "Wardrobes", "Shared bathroom", "WiFi", "AC", "TV"],
        "description": "Luxury 2-person room with enhanced amenities for international students",
        "dimensions": "5.5m x 6m (33 sq.m)",
        "orientation": "East-facing"
      }
    ]
  }
]"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_loads() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.hostels().len(), 6);

        let hostel = catalog.hostel("1").unwrap();
        assert_eq!(hostel.name, "Al-Hikmah Male Hostel A");
        assert_eq!(hostel.gender, HostelGender::Male);
        assert_eq!(hostel.rooms.len(), 4);

        // The booking scenario room
        let room = hostel.room("A201").unwrap();
        assert_eq!(room.kind, RoomKind::FourPerson);
        assert_eq!(room.kind.label(), "Quad Room");
        assert_eq!(room.kind.to_string(), "4-person");
        assert_eq!(room.price, 70000);
        assert!(room.available);

        // A202 is the only occupied room in hostel 1
        assert!(!hostel.room("A202").unwrap().available);
    }

    #[test]
    fn test_unknown_ids_are_none() {
        let catalog = Catalog::load().unwrap();
        assert!(catalog.hostel("999").is_none());
        assert!(catalog.hostel("1").unwrap().room("Z999").is_none());
    }

    #[test]
    fn test_unique_floors_first_seen_order() {
        let catalog = Catalog::load().unwrap();
        let floors = catalog.hostel("1").unwrap().unique_floors();
        assert_eq!(floors, vec!["Ground Floor", "First Floor"]);
    }

    #[test]
    fn test_price_range() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.hostel("1").unwrap().price_range(), Some((70000, 80000)));
        assert_eq!(catalog.hostel("6").unwrap().price_range(), Some((130000, 150000)));
    }
}
