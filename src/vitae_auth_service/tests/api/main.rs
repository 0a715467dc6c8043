mod helpers;
mod login;
mod protected;
mod register;
