mod aircraft;
mod maintenance;
