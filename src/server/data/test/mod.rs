mod clan;
mod player;
