mod constraint;
mod search;
mod stop;
