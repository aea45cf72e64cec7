#[cfg(test)]
mod credentials;
#[cfg(test)]
mod faults;
#[cfg(test)]
mod orders;
#[cfg(test)]
mod rates;
#[cfg(test)]
mod reference_data;
#[cfg(test)]
mod support;
#[cfg(test)]
mod tracking;
