pub mod anagram;
