#[cfg(test)]
mod common;

#[cfg(test)]
mod login_flow_tests;

#[cfg(test)]
mod login_delay_tests;

#[cfg(test)]
mod session_property_tests;

#[cfg(test)]
mod config_tests;
