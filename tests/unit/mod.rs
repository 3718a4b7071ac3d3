mod community;
mod registration;
mod rewards;
mod router;
