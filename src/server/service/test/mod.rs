mod aircraft;
mod auth;
mod flight_log;
