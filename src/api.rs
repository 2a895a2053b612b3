pub mod smartmeter;
