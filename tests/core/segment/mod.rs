// Segmentation tests
