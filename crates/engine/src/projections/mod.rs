pub mod p901_roster;
