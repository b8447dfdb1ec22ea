pub mod food_truck;

pub use food_truck::FoodTruck;
