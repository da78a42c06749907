pub mod bearing;
