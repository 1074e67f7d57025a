pub mod p900_ad_library;
