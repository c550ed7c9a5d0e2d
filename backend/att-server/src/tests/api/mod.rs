mod error;
mod params;
mod route_policies;
